//! Session endpoints under `/api/auth`.

use domain::{LoginRequest, User};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{Method, Transport};

impl<T: Transport> ApiClient<T> {
    /// The signed-in user. A missing session answers `401`.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/api/auth/me").await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest {
            email: email.trim().to_lowercase(),
            password: password.to_string(),
        };
        self.send_json(Method::Post, "/api/auth/login", &request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.fetch(Method::Post, "/api/auth/logout", crate::RequestBody::Empty)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockTransport;
    use crate::{ApiClient, ApiError, Method, RequestBody};

    #[tokio::test]
    async fn test_current_user_unauthorized() {
        let mock = MockTransport::new();
        mock.respond_json(401, r#"{"error":"Not authenticated"}"#);
        let client = ApiClient::new(mock);

        let err = client.current_user().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Not authenticated");
    }

    #[tokio::test]
    async fn test_login_normalises_email() {
        let mock = MockTransport::new();
        mock.respond_json(200, r#"{"id":"u1","email":"ana@example.com","is_admin":true}"#);
        let client = ApiClient::new(mock.clone());

        let user = client.login("  Ana@Example.com ", "secret").await.unwrap();
        assert!(user.is_admin);

        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/api/auth/login");
        assert_eq!(
            sent.body,
            RequestBody::Json(serde_json::json!({"email":"ana@example.com","password":"secret"}))
        );
    }

    #[tokio::test]
    async fn test_logout_accepts_no_content() {
        let mock = MockTransport::new();
        mock.respond(204, "");
        let client = ApiClient::new(mock);
        assert_eq!(client.logout().await, Ok::<(), ApiError>(()));
    }
}
