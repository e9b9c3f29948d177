//! # API client
//!
//! [`ApiClient`] is the single entry point for talking to the portal API. It
//! is cheap to clone (the transport sits behind an `Arc`) and is provided to
//! the component tree through context.
//!
//! [`ApiClient::fetch`] implements the response contract shared by every
//! endpoint: 2xx bodies are parsed as JSON, `204` (or an empty body) yields
//! `None`, and everything else becomes an [`ApiError`]. Resource-specific
//! methods live in sibling modules as further `impl` blocks.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{error_message, ApiError};
use crate::transport::{ApiRequest, HttpTransport, Method, RequestBody, Transport};

pub struct ApiClient<T = HttpTransport> {
    transport: Arc<T>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T> PartialEq for ApiClient<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.transport, &other.transport)
    }
}

impl ApiClient<HttpTransport> {
    /// Client for the browser, talking to `base_url` (empty = page origin).
    pub fn http(base_url: &str) -> Self {
        Self::new(HttpTransport::new(base_url))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Send a request and return the parsed JSON body, or `None` for 204.
    pub async fn fetch(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Option<Value>, ApiError> {
        tracing::debug!("{method} {path}");
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body,
        };
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{method} {path} failed: {e}");
                return Err(e);
            }
        };

        if !(200..300).contains(&response.status) {
            let message = error_message(
                response.status,
                response.content_type.as_deref(),
                &response.body,
            );
            tracing::warn!("{method} {path} -> {}: {message}", response.status);
            return Err(ApiError::Http {
                status: response.status,
                message,
            });
        }

        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(|e| ApiError::Decode(format!("{method} {path}: {e}")))
    }

    /// [`fetch`](Self::fetch) and deserialize. An absent body decodes as
    /// JSON `null`, which suits `()` and `Option<_>`.
    pub async fn fetch_json<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        let value = self.fetch(method, path, body).await?.unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("{method} {path}: {e}")))
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.fetch_json(Method::Get, path, RequestBody::Empty).await
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.fetch_json(method, path, RequestBody::Json(value)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.fetch(Method::Delete, path, RequestBody::Empty).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;

    #[tokio::test]
    async fn test_no_content_resolves_to_none() {
        let mock = MockTransport::new();
        mock.respond(204, "");
        let client = ApiClient::new(mock.clone());

        let result = client.fetch(Method::Post, "/api/auth/logout", RequestBody::Empty).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_non_2xx_carries_status_and_message() {
        let mock = MockTransport::new();
        mock.respond_json(409, r#"{"error":"Slug already taken"}"#);
        let client = ApiClient::new(mock.clone());

        let err = client
            .fetch(Method::Post, "/api/admin/wiki", RequestBody::Empty)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 409,
                message: "Slug already taken".into()
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_parses_json() {
        let mock = MockTransport::new();
        mock.respond_json(200, r#"{"ok":true}"#);
        let client = ApiClient::new(mock.clone());

        let value = client
            .fetch(Method::Get, "/api/ping", RequestBody::Empty)
            .await
            .unwrap();
        assert_eq!(value, Some(serde_json::json!({"ok": true})));
        assert_eq!(mock.requests()[0].method, Method::Get);
    }

    #[tokio::test]
    async fn test_non_json_success_is_decode_error() {
        let mock = MockTransport::new();
        mock.respond(200, "<html>login</html>");
        let client = ApiClient::new(mock.clone());

        let result = client.fetch(Method::Get, "/api/links", RequestBody::Empty).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let mock = MockTransport::new();
        mock.fail("connection refused");
        let client = ApiClient::new(mock.clone());

        let result = client.fetch(Method::Get, "/api/links", RequestBody::Empty).await;
        assert_eq!(result, Err(ApiError::Network("connection refused".into())));
    }

    #[tokio::test]
    async fn test_fetch_json_unit_on_no_content() {
        let mock = MockTransport::new();
        mock.respond(204, "");
        let client = ApiClient::new(mock.clone());

        let result: Result<(), ApiError> = client
            .fetch_json(Method::Delete, "/api/admin/links/1", RequestBody::Empty)
            .await;
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_clones_compare_equal() {
        let client = ApiClient::new(MockTransport::new());
        assert!(client == client.clone());
        assert!(client != ApiClient::new(MockTransport::new()));
    }
}
