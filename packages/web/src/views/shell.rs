use dioxus::prelude::*;

use ui::{Navbar, OfflineBanner, RequireAuth};

use crate::Route;

/// Signed-in chrome around every page except login.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        RequireAuth {
            div {
                class: "app-shell",
                Navbar {}
                OfflineBanner {}
                main {
                    class: "app-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
