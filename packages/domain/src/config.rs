//! # Portal configuration: `portal.toml`
//!
//! The web crate embeds `portal.toml` at build time and parses it with
//! [`PortalConfig::from_toml`]. Every section and field has a serde default,
//! so a missing or empty file is equivalent to [`PortalConfig::default`].
//!
//! ```toml
//! [api]
//! base_url = ""              # empty = window origin
//!
//! [autosave]
//! debounce_ms = 1500
//!
//! [drafts]
//! undo_limit = 50
//!
//! [toasts]
//! duration_ms = 4000
//!
//! [recovery]
//! reload_cooldown_ms = 10000
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `portal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub autosave: AutosaveConfig,
    #[serde(default)]
    pub drafts: DraftsConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
    #[serde(default)]
    pub recovery: RecoveryConfig,
}

/// API connection settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute origin the API lives on. Empty string means the page origin.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutosaveConfig {
    /// Quiet period after the last canvas edit before a save fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftsConfig {
    /// Maximum number of canvas snapshots kept for undo.
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_toast_duration_ms")]
    pub duration_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Minimum gap between two automatic stale-chunk reloads.
    #[serde(default = "default_reload_cooldown_ms")]
    pub reload_cooldown_ms: u64,
}

fn default_debounce_ms() -> u32 {
    1500
}

fn default_undo_limit() -> usize {
    50
}

fn default_toast_duration_ms() -> u32 {
    4000
}

fn default_reload_cooldown_ms() -> u64 {
    10_000
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for DraftsConfig {
    fn default() -> Self {
        Self {
            undo_limit: default_undo_limit(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration_ms(),
        }
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            reload_cooldown_ms: default_reload_cooldown_ms(),
        }
    }
}

impl PortalConfig {
    /// Builder method to point the client at another API origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the autosave debounce.
    pub fn with_debounce_ms(mut self, ms: u32) -> Self {
        self.autosave.debounce_ms = ms;
        self
    }

    /// Builder method to set the undo depth.
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.drafts.undo_limit = limit;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = PortalConfig::from_toml("").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.autosave.debounce_ms, 1500);
        assert_eq!(config.drafts.undo_limit, 50);
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = PortalConfig::from_toml("[autosave]\ndebounce_ms = 250\n").unwrap();
        assert_eq!(config.autosave.debounce_ms, 250);
        assert_eq!(config.toasts.duration_ms, 4000);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PortalConfig::default()
            .with_base_url("https://portal.example.com")
            .with_debounce_ms(800)
            .with_undo_limit(10);
        let text = config.to_toml().unwrap();
        assert_eq!(PortalConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(PortalConfig::from_toml("[drafts]\nundo_limit = \"many\"\n").is_err());
    }
}
