use dioxus::prelude::*;
use domain::listing::{self, ListQuery, SortKey};

use crate::auth::use_auth;
use crate::components::{EmptyState, InlineError, Spinner};
use crate::context::use_api;
use crate::list_controls::ListControls;
use crate::markdown::MarkdownView;
use crate::paths;

#[component]
pub fn WikiIndexView() -> Element {
    let client = use_api();
    let query = use_signal(ListQuery::default);
    let mut pages = use_resource(move || {
        let client = client.clone();
        async move { client.list_wiki_pages().await }
    });

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Wiki" }
            match &*pages.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError {
                        message: format!("Could not load the wiki: {e}"),
                        on_retry: move |_| pages.restart(),
                    }
                },
                Some(Ok(all)) => {
                    let shown = listing::apply(all, &query());
                    rsx! {
                        ListControls {
                            query,
                            sort_options: vec![(SortKey::Title, "Title"), (SortKey::Updated, "Last updated")],
                            placeholder: "Search pages…",
                        }
                        if shown.is_empty() {
                            EmptyState { title: "No pages", message: "Nothing matches the current search." }
                        }
                        ul {
                            class: "page-list",
                            for page in shown {
                                li {
                                    key: "{page.id}",
                                    Link { to: paths::wiki_page(&page.slug), "{page.title}" }
                                    span { class: "view-muted", " · updated {page.updated_at}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn WikiPageView(slug: String) -> Element {
    let client = use_api();
    let auth = use_auth();
    let mut page = use_resource(use_reactive!(|slug| {
        let client = client.clone();
        async move { client.wiki_page(&slug).await }
    }));

    rsx! {
        div {
            class: "view-page",
            Link { class: "view-back", to: paths::WIKI, "← All pages" }
            match &*page.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) if e.is_not_found() => rsx! {
                    EmptyState { title: "Page not found", message: "This wiki page does not exist or was removed." }
                },
                Some(Err(e)) => rsx! {
                    InlineError {
                        message: format!("Could not load the page: {e}"),
                        on_retry: move |_| page.restart(),
                    }
                },
                Some(Ok(page)) => rsx! {
                    div {
                        class: "wiki-header",
                        h1 { class: "view-title", "{page.title}" }
                        if auth().is_admin() {
                            Link { class: "btn btn--ghost", to: paths::wiki_edit(&page.id), "Edit" }
                        }
                    }
                    p {
                        class: "view-muted",
                        "Updated {page.updated_at}"
                        if let Some(by) = &page.updated_by { " by {by}" }
                    }
                    MarkdownView { content: page.content.clone() }
                },
            }
        }
    }
}

