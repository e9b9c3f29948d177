//! Shared message templates and their version history.

use domain::{Template, TemplateInput, TemplateVersion};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{api_path, Method, Transport};

impl<T: Transport> ApiClient<T> {
    pub async fn list_templates(&self) -> Result<Vec<Template>, ApiError> {
        self.get("/api/templates").await
    }

    pub async fn template(&self, id: &str) -> Result<Template, ApiError> {
        self.get(&api_path(&["api", "templates", id])).await
    }

    pub async fn create_template(&self, input: &TemplateInput) -> Result<Template, ApiError> {
        self.send_json(Method::Post, "/api/templates", input).await
    }

    pub async fn update_template(&self, id: &str, input: &TemplateInput) -> Result<Template, ApiError> {
        self.send_json(Method::Put, &api_path(&["api", "templates", id]), input)
            .await
    }

    pub async fn delete_template(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&api_path(&["api", "templates", id])).await
    }

    /// Saved revisions, newest first.
    pub async fn template_versions(&self, id: &str) -> Result<Vec<TemplateVersion>, ApiError> {
        let mut versions: Vec<TemplateVersion> =
            self.get(&api_path(&["api", "templates", id, "versions"])).await?;
        versions.sort_by(|a, b| b.version.cmp(&a.version));
        Ok(versions)
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockTransport;
    use crate::{ApiClient, Method, RequestBody};
    use domain::TemplateInput;

    #[tokio::test]
    async fn test_versions_sorted_newest_first() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            r#"[{"version":1,"content":"a"},{"version":3,"content":"c"},{"version":2,"content":"b"}]"#,
        );
        let client = ApiClient::new(mock);

        let versions = client.template_versions("t1").await.unwrap();
        let numbers: Vec<u32> = versions.iter().map(|v| v.version).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_update_sends_json() {
        let mock = MockTransport::new();
        mock.respond_json(200, r#"{"id":"t1","name":"Welcome","content":"Hi"}"#);
        let client = ApiClient::new(mock.clone());

        let input = TemplateInput {
            name: "Welcome".into(),
            content: "Hi".into(),
            ..TemplateInput::default()
        };
        client.update_template("t1", &input).await.unwrap();

        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.path, "/api/templates/t1");
        assert!(matches!(sent.body, RequestBody::Json(_)));
    }
}
