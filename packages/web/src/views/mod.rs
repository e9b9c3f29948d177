//! Route targets. Each one applies the access rule for its route and
//! renders the shared view from the `ui` crate.

mod admin;
pub use admin::{
    AdminBrandRules, AdminGuests, AdminLinks, AdminTemplates, AdminUsers, AdminWiki, AdminWikiEdit,
    AdminWikiNew,
};

mod apps;
pub use apps::{BrandVoice, Home, Links, TemplateDetail, Templates, WikiIndex, WikiPage};

mod login;
pub use login::Login;

mod not_found;
pub use not_found::NotFound;

mod shell;
pub use shell::AppShell;
