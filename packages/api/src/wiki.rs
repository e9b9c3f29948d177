//! Wiki pages and image uploads.

use domain::{ImageUpload, WikiPage, WikiPageInput, WikiPageSummary};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{api_path, Method, RequestBody, Transport};

impl<T: Transport> ApiClient<T> {
    pub async fn list_wiki_pages(&self) -> Result<Vec<WikiPageSummary>, ApiError> {
        self.get("/api/wiki/pages").await
    }

    pub async fn wiki_page(&self, slug: &str) -> Result<WikiPage, ApiError> {
        self.get(&api_path(&["api", "wiki", "pages", slug])).await
    }

    pub async fn create_wiki_page(&self, input: &WikiPageInput) -> Result<WikiPage, ApiError> {
        self.send_json(Method::Post, "/api/admin/wiki", input).await
    }

    pub async fn update_wiki_page(&self, id: &str, input: &WikiPageInput) -> Result<WikiPage, ApiError> {
        self.send_json(Method::Put, &api_path(&["api", "admin", "wiki", id]), input)
            .await
    }

    pub async fn delete_wiki_page(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&api_path(&["api", "admin", "wiki", id])).await
    }

    /// Upload an image for embedding in a page. Returns its public URL.
    pub async fn upload_wiki_image(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<ImageUpload, ApiError> {
        let body = RequestBody::Multipart {
            field: "file".to_string(),
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        };
        self.fetch_json(Method::Post, "/api/wiki/images", body).await
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockTransport;
    use crate::{ApiClient, RequestBody};

    #[tokio::test]
    async fn test_wiki_page_encodes_slug() {
        let mock = MockTransport::new();
        mock.respond_json(
            200,
            r#"{"id":"p1","slug":"how to/vpn","title":"VPN","content":"Use it."}"#,
        );
        let client = ApiClient::new(mock.clone());

        let page = client.wiki_page("how to/vpn").await.unwrap();
        assert_eq!(page.title, "VPN");
        assert_eq!(mock.requests()[0].path, "/api/wiki/pages/how%20to%2Fvpn");
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let mock = MockTransport::new();
        let client = ApiClient::new(mock);
        let err = client.wiki_page("nope").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[tokio::test]
    async fn test_upload_uses_multipart_body() {
        let mock = MockTransport::new();
        mock.respond_json(201, r#"{"url":"/uploads/cat.png"}"#);
        let client = ApiClient::new(mock.clone());

        let upload = client
            .upload_wiki_image("cat.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(upload.url, "/uploads/cat.png");
        match &mock.requests()[0].body {
            RequestBody::Multipart { field, file_name, mime, bytes } => {
                assert_eq!(field, "file");
                assert_eq!(file_name, "cat.png");
                assert_eq!(mime, "image/png");
                assert_eq!(bytes, &vec![1, 2, 3]);
            }
            other => panic!("unexpected body {other:?}"),
        }
    }
}
