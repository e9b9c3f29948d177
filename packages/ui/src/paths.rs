//! Route paths shared by views and the router in the `web` crate.

use domain::AppKey;

pub const LOGIN: &str = "/login";
pub const HOME: &str = "/";
pub const LINKS: &str = "/links";
pub const WIKI: &str = "/wiki";
pub const TEMPLATES: &str = "/templates";
pub const BRAND_VOICE: &str = "/brand-voice";
pub const ADMIN_LINKS: &str = "/admin/links";
pub const ADMIN_WIKI: &str = "/admin/wiki";
pub const ADMIN_WIKI_NEW: &str = "/admin/wiki/new";
pub const ADMIN_TEMPLATES: &str = "/admin/templates";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_GUESTS: &str = "/admin/guests";
pub const ADMIN_BRAND_RULES: &str = "/admin/brand-rules";

pub fn wiki_page(slug: &str) -> String {
    format!("{WIKI}/{slug}")
}

pub fn wiki_edit(id: &str) -> String {
    format!("{ADMIN_WIKI}/{id}/edit")
}

pub fn template(id: &str) -> String {
    format!("{TEMPLATES}/{id}")
}

pub fn app_home(app: AppKey) -> &'static str {
    match app {
        AppKey::Links => LINKS,
        AppKey::Wiki => WIKI,
        AppKey::Templates => TEMPLATES,
        AppKey::BrandVoice => BRAND_VOICE,
    }
}

/// Admin screens in menu order.
pub fn admin_pages() -> [(&'static str, &'static str); 6] {
    [
        ("Links", ADMIN_LINKS),
        ("Wiki", ADMIN_WIKI),
        ("Templates", ADMIN_TEMPLATES),
        ("Users", ADMIN_USERS),
        ("Guests", ADMIN_GUESTS),
        ("Brand rules", ADMIN_BRAND_RULES),
    ]
}
