use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::paths;

/// Top bar: app links the user may open, the admin menu and sign out.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let state = auth();
    let mut admin_open = use_signal(|| false);

    let Some(user) = state.user.clone() else {
        return rsx! {
            nav { class: "navbar", Link { class: "navbar-brand", to: paths::HOME, "Portal" } }
        };
    };

    rsx! {
        nav {
            class: "navbar",
            Link { class: "navbar-brand", to: paths::HOME, "Portal" }
            div {
                class: "navbar-links",
                for app in state.visible_apps() {
                    Link { key: "{app.as_str()}", class: "navbar-link", to: paths::app_home(app), "{app.label()}" }
                }
            }
            div {
                class: "navbar-end",
                if state.is_admin() {
                    div {
                        class: "navbar-menu",
                        button {
                            class: "btn btn--ghost",
                            onclick: move |_| admin_open.toggle(),
                            "Admin"
                        }
                        if admin_open() {
                            div {
                                class: "navbar-menu-items",
                                onclick: move |_| admin_open.set(false),
                                for (label, to) in paths::admin_pages() {
                                    Link { key: "{to}", class: "navbar-menu-item", to: to, "{label}" }
                                }
                            }
                        }
                    }
                }
                span { class: "navbar-user", title: "{user.email}", "{user.display_name()}" }
                LogoutButton { class: "btn btn--ghost" }
            }
        }
    }
}
