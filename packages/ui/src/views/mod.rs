//! Page views. The `web` crate maps routes onto these and wraps them in
//! the matching guard.

pub mod admin;
mod home;
mod links;
mod login;
mod not_found;
mod templates;
mod wiki;

pub use admin::{
    AdminBrandRulesView, AdminGuestsView, AdminLinksView, AdminTemplatesView, AdminUsersView,
    AdminWikiView, WikiEditorView,
};
pub use home::HomeView;
pub use links::LinksView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use templates::{TemplateDetailView, TemplatesView};
pub use wiki::{WikiIndexView, WikiPageView};

pub use crate::brand_voice::BrandVoiceView;
