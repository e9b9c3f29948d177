use dioxus::prelude::*;

use crate::components::EmptyState;
use crate::paths;

#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        EmptyState {
            title: "Page not found",
            message: format!("Nothing lives at {path}."),
            Link { class: "btn btn--secondary", to: paths::HOME, "Back to the portal" }
        }
    }
}
