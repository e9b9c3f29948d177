//! # API errors
//!
//! Every failed call surfaces as an [`ApiError`]. Non-2xx responses become
//! [`ApiError::Http`] carrying the status and a message derived from the
//! body by [`error_message`]; the other variants cover requests that never
//! produced a response and responses that could not be decoded.

use thiserror::Error;

/// Longest plain-text body echoed back as an error message.
const MAX_TEXT_MESSAGE: usize = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Human-readable message for a non-2xx response.
///
/// Prefers a JSON `error`, `message` or `detail` field, then a short
/// plain-text body, and finally `HTTP <status>`. HTML error pages are never
/// echoed.
pub fn error_message(status: u16, content_type: Option<&str>, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message", "detail"] {
            if let Some(serde_json::Value::String(s)) = map.get(key) {
                if !s.trim().is_empty() {
                    return s.trim().to_string();
                }
            }
        }
        return format!("HTTP {status}");
    }

    let text = body.trim();
    if !text.is_empty() && !looks_like_html(content_type, text) {
        return truncate(text, MAX_TEXT_MESSAGE);
    }
    format!("HTTP {status}")
}

fn looks_like_html(content_type: Option<&str>, text: &str) -> bool {
    if content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("text/html")) {
        return true;
    }
    let head: String = text.chars().take(15).collect::<String>().to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fields_in_priority_order() {
        assert_eq!(error_message(400, None, r#"{"error":"Bad slug"}"#), "Bad slug");
        assert_eq!(
            error_message(422, None, r#"{"message":"  ","detail":"Title required"}"#),
            "Title required"
        );
        assert_eq!(error_message(500, None, r#"{"code":17}"#), "HTTP 500");
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(error_message(502, Some("text/plain"), " upstream down \n"), "upstream down");
    }

    #[test]
    fn test_long_text_is_truncated() {
        let body = "x".repeat(300);
        let message = error_message(500, None, &body);
        assert_eq!(message.chars().count(), MAX_TEXT_MESSAGE + 1);
        assert!(message.ends_with('…'));
    }

    #[test]
    fn test_html_pages_are_rejected() {
        assert_eq!(
            error_message(503, Some("text/html; charset=utf-8"), "Service Unavailable"),
            "HTTP 503"
        );
        assert_eq!(
            error_message(404, None, "<!DOCTYPE html><html><body>nope</body></html>"),
            "HTTP 404"
        );
        assert_eq!(error_message(500, None, "   "), "HTTP 500");
    }

    #[test]
    fn test_status_helpers() {
        let err = ApiError::Http {
            status: 401,
            message: "Unauthorized".into(),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Unauthorized");
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }
}
