//! # Signed-in user and per-app grants
//!
//! [`User`] is what `GET /api/auth/me` returns. Access to individual portal
//! apps is granted per user through [`AppKey`] entries in `apps`; admins and
//! internal staff implicitly see every app (see [`crate::access`]).

use serde::{Deserialize, Serialize};

/// One of the portal's gated applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppKey {
    Links,
    Wiki,
    Templates,
    BrandVoice,
}

impl AppKey {
    pub fn all() -> [AppKey; 4] {
        [AppKey::Links, AppKey::Wiki, AppKey::Templates, AppKey::BrandVoice]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppKey::Links => "Links",
            AppKey::Wiki => "Wiki",
            AppKey::Templates => "Templates",
            AppKey::BrandVoice => "Brand Voice",
        }
    }

    /// Wire name, as used in grant lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppKey::Links => "links",
            AppKey::Wiki => "wiki",
            AppKey::Templates => "templates",
            AppKey::BrandVoice => "brand_voice",
        }
    }

    pub fn parse(s: &str) -> Option<AppKey> {
        AppKey::all().into_iter().find(|app| app.as_str() == s)
    }
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    /// Staff accounts, as opposed to guests.
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub apps: Vec<AppKey>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    /// Whether the user holds an explicit grant for `app`.
    pub fn has_app(&self, app: AppKey) -> bool {
        self.apps.contains(&app)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_with_defaults() {
        let user: User =
            serde_json::from_str(r#"{"id":"u1","email":"a@b.co","apps":["brand_voice"]}"#).unwrap();
        assert!(!user.is_admin);
        assert!(user.has_app(AppKey::BrandVoice));
        assert!(!user.has_app(AppKey::Wiki));
        assert_eq!(user.display_name(), "a@b.co");
    }

    #[test]
    fn test_display_name_ignores_blank_name() {
        let user = User {
            id: "u1".into(),
            email: "a@b.co".into(),
            name: Some("  ".into()),
            is_admin: false,
            is_internal: false,
            apps: vec![],
        };
        assert_eq!(user.display_name(), "a@b.co");
    }

    #[test]
    fn test_app_key_wire_names() {
        for app in AppKey::all() {
            assert_eq!(AppKey::parse(app.as_str()), Some(app));
        }
        assert_eq!(AppKey::parse("unknown"), None);
    }
}
