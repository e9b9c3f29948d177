use dioxus::prelude::*;
use domain::listing::{self, ListQuery, SortKey};

use crate::components::{EmptyState, InlineError, Spinner};
use crate::context::use_api;
use crate::list_controls::ListControls;

#[component]
pub fn LinksView() -> Element {
    let client = use_api();
    let query = use_signal(|| ListQuery::sorted_by(SortKey::Position, Default::default()));
    let mut links = use_resource(move || {
        let client = client.clone();
        async move { client.list_links().await }
    });

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Links" }
            match &*links.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError {
                        message: format!("Could not load links: {e}"),
                        on_retry: move |_| links.restart(),
                    }
                },
                Some(Ok(all)) => {
                    let shown = listing::apply(all, &query());
                    rsx! {
                        ListControls {
                            query,
                            categories: listing::categories(all),
                            sort_options: vec![(SortKey::Position, "Default order"), (SortKey::Title, "Title")],
                            placeholder: "Search links…",
                        }
                        if shown.is_empty() {
                            EmptyState { title: "No links", message: "Nothing matches the current filter." }
                        }
                        div {
                            class: "link-grid",
                            for link in shown {
                                a {
                                    key: "{link.id}",
                                    class: "link-card",
                                    href: "{link.url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    h3 { class: "link-card-title", "{link.title}" }
                                    if let Some(description) = &link.description {
                                        p { class: "view-muted", "{description}" }
                                    }
                                    if let Some(category) = &link.category {
                                        span { class: "badge", "{category}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
