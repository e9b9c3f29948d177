//! Brand voice rewriting and drafting threads.

use serde::Serialize;

use domain::{BrandVoiceThread, DraftVersion, RewriteRequest, RewriteResponse, ThreadSummary};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{api_path, Method, Transport};

#[derive(Serialize)]
struct NewThread<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct NewMessage<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct DraftBody<'a> {
    text: &'a str,
}

impl<T: Transport> ApiClient<T> {
    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<RewriteResponse, ApiError> {
        self.send_json(Method::Post, "/api/brand-voice/rewrite", request)
            .await
    }

    pub async fn list_threads(&self) -> Result<Vec<ThreadSummary>, ApiError> {
        self.get("/api/brand-voice/threads").await
    }

    pub async fn thread(&self, id: &str) -> Result<BrandVoiceThread, ApiError> {
        self.get(&api_path(&["api", "brand-voice", "threads", id])).await
    }

    pub async fn create_thread(&self, title: &str) -> Result<BrandVoiceThread, ApiError> {
        self.send_json(Method::Post, "/api/brand-voice/threads", &NewThread { title })
            .await
    }

    /// Post a chat message; the assistant's reply (and possibly a new
    /// draft) comes back in the returned thread.
    pub async fn send_message(&self, id: &str, content: &str) -> Result<BrandVoiceThread, ApiError> {
        self.send_json(
            Method::Post,
            &api_path(&["api", "brand-voice", "threads", id, "messages"]),
            &NewMessage { content },
        )
        .await
    }

    pub async fn save_draft(&self, id: &str, text: &str) -> Result<BrandVoiceThread, ApiError> {
        self.send_json(
            Method::Put,
            &api_path(&["api", "brand-voice", "threads", id, "draft"]),
            &DraftBody { text },
        )
        .await
    }

    /// Draft history, newest first.
    pub async fn draft_versions(&self, id: &str) -> Result<Vec<DraftVersion>, ApiError> {
        let mut versions: Vec<DraftVersion> = self
            .get(&api_path(&["api", "brand-voice", "threads", id, "drafts"]))
            .await?;
        versions.sort_by(|a, b| b.version.cmp(&a.version));
        Ok(versions)
    }

    pub async fn delete_thread(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&api_path(&["api", "brand-voice", "threads", id]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockTransport;
    use crate::{ApiClient, Method, RequestBody};
    use domain::{RewriteMode, RewriteRequest};

    #[tokio::test]
    async fn test_rewrite_request_shape() {
        let mock = MockTransport::new();
        mock.respond_json(200, r#"{"output":"Hello there."}"#);
        let client = ApiClient::new(mock.clone());

        let response = client
            .rewrite(&RewriteRequest {
                text: "hey".into(),
                mode: RewriteMode::Proofread,
                thread_id: None,
            })
            .await
            .unwrap();
        assert_eq!(response.output, "Hello there.");
        assert!(response.thread.is_none());
        assert_eq!(
            mock.requests()[0].body,
            RequestBody::Json(serde_json::json!({"text":"hey","mode":"proofread"}))
        );
    }

    #[tokio::test]
    async fn test_save_draft_returns_thread() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            r#"{"id":"t1","title":"Launch","draft":"v2 text","draft_version":2}"#,
        );
        let client = ApiClient::new(mock.clone());

        let thread = client.save_draft("t1", "v2 text").await.unwrap();
        assert_eq!(thread.draft_version, 2);
        assert!(thread.messages.is_empty());

        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.path, "/api/brand-voice/threads/t1/draft");
    }

    #[tokio::test]
    async fn test_draft_versions_sorted() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            r#"[{"version":1,"text":"a","source":"user"},{"version":2,"text":"b","source":"assistant"}]"#,
        );
        let client = ApiClient::new(mock);

        let versions = client.draft_versions("t1").await.unwrap();
        assert_eq!(versions[0].version, 2);
    }
}
