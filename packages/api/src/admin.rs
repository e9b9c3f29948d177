//! Admin-only endpoints: guests, users and brand rules.

use domain::{AdminUser, AdminUserUpdate, BrandRule, BrandRuleInput, GuestGrant, GuestGrantInput};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{api_path, Method, Transport};

impl<T: Transport> ApiClient<T> {
    pub async fn list_guests(&self) -> Result<Vec<GuestGrant>, ApiError> {
        self.get("/api/admin/guests").await
    }

    pub async fn create_guest(&self, input: &GuestGrantInput) -> Result<GuestGrant, ApiError> {
        self.send_json(Method::Post, "/api/admin/guests", input).await
    }

    pub async fn revoke_guest(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&api_path(&["api", "admin", "guests", id])).await
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get("/api/admin/users").await
    }

    pub async fn update_user(&self, id: &str, update: &AdminUserUpdate) -> Result<AdminUser, ApiError> {
        self.send_json(Method::Patch, &api_path(&["api", "admin", "users", id]), update)
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&api_path(&["api", "admin", "users", id])).await
    }

    pub async fn list_brand_rules(&self) -> Result<Vec<BrandRule>, ApiError> {
        self.get("/api/admin/brand-rules").await
    }

    pub async fn create_brand_rule(&self, input: &BrandRuleInput) -> Result<BrandRule, ApiError> {
        self.send_json(Method::Post, "/api/admin/brand-rules", input).await
    }

    pub async fn update_brand_rule(&self, id: &str, input: &BrandRuleInput) -> Result<BrandRule, ApiError> {
        self.send_json(Method::Put, &api_path(&["api", "admin", "brand-rules", id]), input)
            .await
    }

    pub async fn delete_brand_rule(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&api_path(&["api", "admin", "brand-rules", id])).await
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::MockTransport;
    use crate::{ApiClient, Method, RequestBody};
    use domain::{AdminUserUpdate, AppKey};

    #[tokio::test]
    async fn test_update_user_patches_only_given_fields() {
        let mock = MockTransport::new();
        mock.respond_json(200, r#"{"id":"u2","email":"b@example.com","apps":["wiki"]}"#);
        let client = ApiClient::new(mock.clone());

        let update = AdminUserUpdate {
            is_admin: None,
            apps: Some(vec![AppKey::Wiki]),
        };
        let user = client.update_user("u2", &update).await.unwrap();
        assert_eq!(user.apps, vec![AppKey::Wiki]);

        let sent = &mock.requests()[0];
        assert_eq!(sent.method, Method::Patch);
        assert_eq!(sent.body, RequestBody::Json(serde_json::json!({"apps":["wiki"]})));
    }

    #[tokio::test]
    async fn test_revoke_guest_error_surfaces_detail() {
        let mock = MockTransport::new();
        mock.respond_json(403, r#"{"detail":"Admins only"}"#);
        let client = ApiClient::new(mock);

        let err = client.revoke_guest("g1").await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "Admins only");
    }
}
