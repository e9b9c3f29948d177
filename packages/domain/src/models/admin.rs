//! Records only visible on the admin screens.

use serde::{Deserialize, Serialize};

use super::user::AppKey;

/// Time-limited access for an external email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestGrant {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub apps: Vec<AppKey>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestGrantInput {
    pub email: String,
    pub apps: Vec<AppKey>,
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub apps: Vec<AppKey>,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

/// Partial update sent with `PATCH /api/admin/users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apps: Option<Vec<AppKey>>,
}

/// A house-style rule fed to the brand voice assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRule {
    pub id: String,
    pub title: String,
    pub rule: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRuleInput {
    pub title: String,
    pub rule: String,
    pub example: Option<String>,
    pub enabled: bool,
}

impl Default for BrandRuleInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            rule: String::new(),
            example: None,
            enabled: enabled_by_default(),
        }
    }
}

impl From<&BrandRule> for BrandRuleInput {
    fn from(rule: &BrandRule) -> Self {
        Self {
            title: rule.title.clone(),
            rule: rule.rule.clone(),
            example: rule.example.clone(),
            enabled: rule.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_update_skips_unset_fields() {
        let update = AdminUserUpdate {
            is_admin: Some(true),
            apps: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"is_admin":true}"#);
    }

    #[test]
    fn test_brand_rule_enabled_defaults_true() {
        let rule: BrandRule =
            serde_json::from_str(r#"{"id":"r1","title":"Tone","rule":"Be warm"}"#).unwrap();
        assert!(rule.enabled);
    }
}
