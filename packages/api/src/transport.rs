//! # Transport seam
//!
//! [`ApiClient`](crate::ApiClient) never touches the network directly; it
//! hands an [`ApiRequest`] to a [`Transport`] and interprets the
//! [`ApiResponse`]. [`HttpTransport`] is the browser implementation on top of
//! `reqwest` (which uses `fetch` on wasm); tests use
//! [`MockTransport`](crate::MockTransport).

use std::fmt;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Single-file upload. No JSON content type is set so the browser can
    /// supply the multipart boundary.
    Multipart {
        field: String,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Origin-relative path, e.g. `/api/links`.
    pub path: String,
    pub body: RequestBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// Sends one request and returns the raw response.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, ApiError>>;
}

/// Build an origin-relative path from raw segments, percent-encoding each.
pub fn api_path(segments: &[&str]) -> String {
    let mut url = match Url::parse("http://localhost/") {
        Ok(url) => url,
        Err(_) => return format!("/{}", segments.join("/")),
    };
    if let Ok(mut parts) = url.path_segments_mut() {
        parts.clear().extend(segments);
    }
    url.path().to_string()
}

/// `reqwest`-backed transport with same-origin cookie credentials.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Option<Url>,
}

impl HttpTransport {
    /// `base_url` empty means the current page origin.
    pub fn new(base_url: &str) -> Self {
        let base = if base_url.trim().is_empty() {
            page_origin()
        } else {
            Some(base_url.trim().to_string())
        };
        let base = base.and_then(|b| match Url::parse(&b) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Ignoring invalid API base URL {b}: {e}");
                None
            }
        });
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        match &self.base {
            Some(base) => base.join(path),
            None => Url::parse(path),
        }
        .map_err(|e| ApiError::Network(format!("Invalid request URL {path}: {e}")))
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.resolve(&request.path)?;
        let mut builder = self
            .client
            .request(request.method.into(), url)
            .header(ACCEPT, "application/json");

        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_same_origin();
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(value.to_string()),
            RequestBody::Multipart {
                field,
                file_name,
                mime,
                bytes,
            } => {
                let part = reqwest::multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&mime)
                    .map_err(|e| ApiError::Network(e.to_string()))?;
                builder.multipart(reqwest::multipart::Form::new().part(field, part))
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path_encodes_segments() {
        assert_eq!(api_path(&["api", "links"]), "/api/links");
        assert_eq!(
            api_path(&["api", "wiki", "pages", "team notes/2024"]),
            "/api/wiki/pages/team%20notes%2F2024"
        );
    }

    #[test]
    fn test_resolve_against_base() {
        let transport = HttpTransport::new("https://portal.example.com");
        let url = transport.resolve("/api/auth/me").unwrap();
        assert_eq!(url.as_str(), "https://portal.example.com/api/auth/me");
    }

    #[test]
    fn test_relative_path_without_base_is_an_error() {
        let transport = HttpTransport::new("");
        assert!(matches!(
            transport.resolve("/api/links"),
            Err(ApiError::Network(_))
        ));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }
}
