//! Link directory endpoints.

use domain::{Link, LinkInput};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{api_path, Method, Transport};

impl<T: Transport> ApiClient<T> {
    pub async fn list_links(&self) -> Result<Vec<Link>, ApiError> {
        self.get("/api/links").await
    }

    pub async fn create_link(&self, input: &LinkInput) -> Result<Link, ApiError> {
        self.send_json(Method::Post, "/api/admin/links", input).await
    }

    pub async fn update_link(&self, id: &str, input: &LinkInput) -> Result<Link, ApiError> {
        self.send_json(Method::Put, &api_path(&["api", "admin", "links", id]), input)
            .await
    }

    pub async fn delete_link(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&api_path(&["api", "admin", "links", id])).await
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockTransport;
    use crate::{ApiClient, Method};

    #[tokio::test]
    async fn test_list_links() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            r#"[{"id":"1","title":"Payroll","url":"https://pay.example.com","category":"HR"}]"#,
        );
        let client = ApiClient::new(mock);

        let links = client.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].category.as_deref(), Some("HR"));
        assert_eq!(links[0].position, 0);
    }

    #[tokio::test]
    async fn test_delete_link_path() {
        let mock = MockTransport::new();
        mock.respond(204, "");
        let client = ApiClient::new(mock.clone());

        client.delete_link("a b").await.unwrap();
        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.path, "/api/admin/links/a%20b");
    }
}
