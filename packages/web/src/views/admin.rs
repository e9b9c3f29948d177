use dioxus::prelude::*;

use ui::views::{
    AdminBrandRulesView, AdminGuestsView, AdminLinksView, AdminTemplatesView, AdminUsersView,
    AdminWikiView, WikiEditorView,
};
use ui::RequireAdmin;

#[component]
pub fn AdminLinks() -> Element {
    rsx! {
        RequireAdmin { AdminLinksView {} }
    }
}

#[component]
pub fn AdminWiki() -> Element {
    rsx! {
        RequireAdmin { AdminWikiView {} }
    }
}

#[component]
pub fn AdminWikiNew() -> Element {
    rsx! {
        RequireAdmin { WikiEditorView { id: None } }
    }
}

#[component]
pub fn AdminWikiEdit(id: String) -> Element {
    rsx! {
        RequireAdmin { WikiEditorView { key: "{id}", id: Some(id.clone()) } }
    }
}

#[component]
pub fn AdminTemplates() -> Element {
    rsx! {
        RequireAdmin { AdminTemplatesView {} }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        RequireAdmin { AdminUsersView {} }
    }
}

#[component]
pub fn AdminGuests() -> Element {
    rsx! {
        RequireAdmin { AdminGuestsView {} }
    }
}

#[component]
pub fn AdminBrandRules() -> Element {
    rsx! {
        RequireAdmin { AdminBrandRulesView {} }
    }
}
