use dioxus::prelude::*;

use domain::PortalConfig;
use ui::PortalProvider;
use views::{
    AdminBrandRules, AdminGuests, AdminLinks, AdminTemplates, AdminUsers, AdminWiki, AdminWikiEdit,
    AdminWikiNew, AppShell, BrandVoice, Home, Links, Login, NotFound, TemplateDetail, Templates,
    WikiIndex, WikiPage,
};

mod recovery;
mod service_worker;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/links")]
        Links {},
        #[route("/wiki")]
        WikiIndex {},
        #[route("/wiki/:slug")]
        WikiPage { slug: String },
        #[route("/templates")]
        Templates {},
        #[route("/templates/:id")]
        TemplateDetail { id: String },
        #[route("/brand-voice")]
        BrandVoice {},
        #[route("/admin/links")]
        AdminLinks {},
        #[route("/admin/wiki")]
        AdminWiki {},
        #[route("/admin/wiki/new")]
        AdminWikiNew {},
        #[route("/admin/wiki/:id/edit")]
        AdminWikiEdit { id: String },
        #[route("/admin/templates")]
        AdminTemplates {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/admin/guests")]
        AdminGuests {},
        #[route("/admin/brand-rules")]
        AdminBrandRules {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const PORTAL_TOML: &str = include_str!("../portal.toml");

fn main() {
    dioxus::launch(App);
}

/// Settings baked into the bundle. A broken file falls back to defaults so
/// the portal still starts.
fn load_config() -> PortalConfig {
    match PortalConfig::from_toml(PORTAL_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("invalid {}: {e}; using defaults", PortalConfig::filename());
            PortalConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let cooldown_ms = config.recovery.reload_cooldown_ms;

    use_hook(service_worker::register);
    recovery::use_stale_asset_listener(cooldown_ms);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        PortalProvider {
            config,
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| {
                    let message = errors
                        .error()
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "Unknown error".to_string());
                    rsx! { recovery::RenderError { message, cooldown_ms } }
                },
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = PortalConfig::from_toml(PORTAL_TOML).unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_routes_parse() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
        assert_eq!(
            "/admin/wiki/abc/edit".parse::<Route>().ok(),
            Some(Route::AdminWikiEdit { id: "abc".to_string() })
        );
        assert_eq!("/admin/wiki/new".parse::<Route>().ok(), Some(Route::AdminWikiNew {}));
        assert!(matches!("/nope/deeper".parse::<Route>(), Ok(Route::NotFound { .. })));
    }
}
