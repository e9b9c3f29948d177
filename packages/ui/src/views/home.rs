use dioxus::prelude::*;
use domain::AppKey;

use crate::auth::use_auth;
use crate::components::EmptyState;
use crate::paths;

fn blurb(app: AppKey) -> &'static str {
    match app {
        AppKey::Links => "Bookmarks to the tools the team uses every day.",
        AppKey::Wiki => "How we work, written down.",
        AppKey::Templates => "Reusable emails and messages with fill-in variables.",
        AppKey::BrandVoice => "Draft and rewrite copy in the house style.",
    }
}

/// App tiles for everything the signed-in user may open.
#[component]
pub fn HomeView() -> Element {
    let auth = use_auth();
    let state = auth();
    let apps = state.visible_apps();
    let name = state
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Welcome, {name}" }
            if apps.is_empty() {
                EmptyState {
                    title: "No apps yet",
                    message: "Your account has not been given access to any apps. Ask a portal admin.",
                }
            } else {
                div {
                    class: "app-tiles",
                    for app in apps {
                        Link {
                            key: "{app.as_str()}",
                            class: "app-tile",
                            to: paths::app_home(app),
                            h2 { class: "app-tile-title", "{app.label()}" }
                            p { class: "view-muted", "{blurb(app)}" }
                        }
                    }
                }
            }
        }
    }
}
