//! Route guards.
//!
//! Each guard renders its children only when [`domain::decide`] grants the
//! requirement. Unauthenticated visitors are sent to the login page.

use dioxus::prelude::*;
use domain::{decide, Access, AppKey, Requirement};

use crate::auth::use_auth;
use crate::components::{EmptyState, Spinner};
use crate::paths;

#[component]
fn Guard(requirement: Requirement, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let access = decide(&auth(), requirement);

    use_effect(move || {
        if decide(&auth(), requirement) == Access::NeedsLogin {
            nav.replace(paths::LOGIN);
        }
    });

    match access {
        Access::Granted => rsx! { {children} },
        Access::Loading | Access::NeedsLogin => rsx! {
            div { class: "view-page", Spinner {} }
        },
        Access::Forbidden => rsx! {
            EmptyState {
                title: "No access",
                message: "Your account does not have access to this page. Ask a portal admin to grant it.",
            }
        },
    }
}

#[component]
pub fn RequireAuth(children: Element) -> Element {
    rsx! {
        Guard { requirement: Requirement::Authenticated, {children} }
    }
}

#[component]
pub fn RequireAdmin(children: Element) -> Element {
    rsx! {
        Guard { requirement: Requirement::Admin, {children} }
    }
}

#[component]
pub fn RequireApp(app: AppKey, children: Element) -> Element {
    rsx! {
        Guard { requirement: Requirement::App(app), {children} }
    }
}
