//! Shared UI for the portal: context providers, guards, components and
//! page views. The `web` crate owns the router and mounts these.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod brand_voice;
pub mod components;
pub mod paths;
pub mod views;

mod auth;
pub use auth::{refresh_user, use_auth, AuthProvider, LogoutButton};

mod context;
pub use context::{use_api, use_config, PortalProvider};

mod diff_view;
pub use diff_view::DiffView;

mod guards;
pub use guards::{RequireAdmin, RequireApp, RequireAuth};

pub mod js;

mod list_controls;
pub use list_controls::ListControls;

pub mod markdown;
pub use markdown::{MarkdownEditor, MarkdownView};

mod navbar;
pub use navbar::Navbar;

mod offline_banner;
pub use offline_banner::OfflineBanner;

mod timer;
pub use timer::sleep_ms;

mod toast;
pub use toast::{use_toasts, ToastProvider, Toasts};
