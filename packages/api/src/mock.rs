use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Scripted in-memory transport for tests.
///
/// Responses are served in the order they were queued; once the queue is
/// empty every request gets a `404`. Every request is recorded.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.push(Ok(ApiResponse {
            status,
            content_type: Some("text/plain".to_string()),
            body: body.to_string(),
        }));
    }

    pub fn respond_json(&self, status: u16, body: &str) {
        self.push(Ok(ApiResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.push(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, response: Result<ApiResponse, ApiError>) {
        self.responses.lock().unwrap().push_back(response);
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ApiResponse {
                    status: 404,
                    content_type: None,
                    body: String::new(),
                })
            })
    }
}
