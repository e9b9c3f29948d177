use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use domain::listing::{self, ListQuery, SortDirection, SortKey};
use domain::models::wiki::slugify;
use domain::{WikiPage, WikiPageInput, WikiPageSummary};

use crate::components::{Button, ButtonVariant, ConfirmDialog, EmptyState, InlineError, Input, Label, Spinner};
use crate::context::use_api;
use crate::list_controls::ListControls;
use crate::markdown::MarkdownEditor;
use crate::paths;
use crate::toast::use_toasts;

#[component]
pub fn AdminWikiView() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let query = use_signal(|| ListQuery::sorted_by(SortKey::Updated, SortDirection::Descending));
    let mut deleting = use_signal(|| Option::<WikiPageSummary>::None);

    let list_client = client.clone();
    let mut pages = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_wiki_pages().await }
    });

    let delete = move |page: WikiPageSummary| {
        let client = client.clone();
        spawn(async move {
            match client.delete_wiki_page(&page.id).await {
                Ok(()) => {
                    toasts.success(format!("Deleted {}", page.title));
                    pages.restart();
                }
                Err(e) => toasts.error(format!("Could not delete page: {e}")),
            }
        });
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Manage wiki" }
                Link { class: "btn btn--primary", to: paths::ADMIN_WIKI_NEW, "New page" }
            }
            match &*pages.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError { message: format!("Could not load pages: {e}"), on_retry: move |_| pages.restart() }
                },
                Some(Ok(all)) => {
                    let shown = listing::apply(all, &query());
                    rsx! {
                        ListControls {
                            query,
                            sort_options: vec![(SortKey::Updated, "Last updated"), (SortKey::Title, "Title")],
                        }
                        table {
                            class: "admin-table",
                            thead {
                                tr { th { "Title" } th { "Slug" } th { "Updated" } th {} }
                            }
                            tbody {
                                for page in shown {
                                    tr {
                                        key: "{page.id}",
                                        td { Link { to: paths::wiki_page(&page.slug), "{page.title}" } }
                                        td { code { "{page.slug}" } }
                                        td { "{page.updated_at}" }
                                        td {
                                            class: "admin-table-actions",
                                            Link { class: "btn btn--ghost", to: paths::wiki_edit(&page.id), "Edit" }
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: {
                                                    let page = page.clone();
                                                    move |_| deleting.set(Some(page.clone()))
                                                },
                                                "Delete"
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
        if let Some(page) = deleting() {
            ConfirmDialog {
                title: "Delete page?",
                message: format!("{} will be removed from the wiki.", page.title),
                on_cancel: move |_| deleting.set(None),
                on_confirm: move |_| {
                    deleting.set(None);
                    delete(page.clone());
                },
            }
        }
    }
}

/// Pages are addressed by slug, so editing by id goes through the index.
async fn load_page_by_id(client: &ApiClient, id: &str) -> Result<WikiPage, ApiError> {
    let pages = client.list_wiki_pages().await?;
    let Some(summary) = pages.into_iter().find(|p| p.id == id) else {
        return Err(ApiError::Http {
            status: 404,
            message: "Page not found".to_string(),
        });
    };
    client.wiki_page(&summary.slug).await
}

/// Create a page (`id` is `None`) or edit an existing one.
#[component]
pub fn WikiEditorView(#[props(!optional)] id: Option<String>) -> Element {
    let client = use_api();
    let page = use_resource(use_reactive!(|id| {
        let client = client.clone();
        async move {
            match id {
                Some(id) => load_page_by_id(&client, &id).await.map(Some),
                None => Ok(None),
            }
        }
    }));

    rsx! {
        div {
            class: "view-page",
            Link { class: "view-back", to: paths::ADMIN_WIKI, "← Manage wiki" }
            match &*page.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) if e.is_not_found() => rsx! {
                    EmptyState { title: "Page not found", message: "It may have been deleted." }
                },
                Some(Err(e)) => rsx! { InlineError { message: format!("Could not load the page: {e}") } },
                Some(Ok(existing)) => rsx! {
                    WikiForm {
                        id: existing.as_ref().map(|p| p.id.clone()),
                        initial: existing.as_ref().map(WikiPageInput::from).unwrap_or_default(),
                    }
                },
            }
        }
    }
}

#[component]
fn WikiForm(#[props(!optional)] id: Option<String>, initial: WikiPageInput) -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let nav = use_navigator();
    let is_new = id.is_none();
    let mut title = use_signal(|| initial.title.clone());
    let mut slug = use_signal(|| initial.slug.clone());
    // New pages derive the slug from the title until the slug is edited.
    let mut slug_touched = use_signal(|| !is_new);
    let content = use_signal(|| initial.content.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let save = move |_| {
        let client = client.clone();
        let id = id.clone();
        async move {
            let input = WikiPageInput {
                slug: slugify(&slug()),
                title: title().trim().to_string(),
                content: content(),
            };
            if input.title.is_empty() || input.slug.is_empty() {
                error.set(Some("Title and slug are required.".to_string()));
                return;
            }
            saving.set(true);
            error.set(None);
            let result = match &id {
                Some(id) => client.update_wiki_page(id, &input).await,
                None => client.create_wiki_page(&input).await,
            };
            saving.set(false);
            match result {
                Ok(page) => {
                    tracing::info!("saved wiki page {}", page.slug);
                    toasts.success(format!("Saved {}", page.title));
                    nav.push(paths::wiki_page(&page.slug));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    };

    rsx! {
        h1 { class: "view-title", if is_new { "New page" } else { "Edit page" } }
        if let Some(message) = error() {
            InlineError { message }
        }
        div { class: "field",
            Label { html_for: "wiki-title", "Title" }
            Input {
                id: "wiki-title",
                value: title(),
                oninput: move |e: FormEvent| {
                    let value = e.value();
                    if !slug_touched() {
                        slug.set(slugify(&value));
                    }
                    title.set(value);
                },
            }
        }
        div { class: "field",
            Label { html_for: "wiki-slug", "Slug" }
            Input {
                id: "wiki-slug",
                value: slug(),
                oninput: move |e: FormEvent| {
                    slug_touched.set(true);
                    slug.set(e.value());
                },
            }
            p { class: "view-muted", "Address: {paths::wiki_page(&slugify(&slug()))}" }
        }
        MarkdownEditor { content }
        div {
            class: "form-actions",
            Button { disabled: saving(), onclick: save, if saving() { "Saving…" } else { "Save page" } }
        }
    }
}
