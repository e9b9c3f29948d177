use dioxus::prelude::*;
use domain::listing::{self, ListQuery, SortKey};
use domain::{Link, LinkInput};

use super::non_blank;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, InlineError, Input, Label, ModalOverlay, Spinner,
};
use crate::context::use_api;
use crate::list_controls::ListControls;
use crate::toast::use_toasts;

#[derive(Clone, PartialEq)]
struct Editing {
    id: Option<String>,
    input: LinkInput,
}

#[component]
pub fn AdminLinksView() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let query = use_signal(|| ListQuery::sorted_by(SortKey::Position, Default::default()));
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut deleting = use_signal(|| Option::<Link>::None);

    let list_client = client.clone();
    let mut links = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_links().await }
    });

    let delete = move |link: Link| {
        let client = client.clone();
        spawn(async move {
            match client.delete_link(&link.id).await {
                Ok(()) => {
                    toasts.success(format!("Deleted {}", link.title));
                    links.restart();
                }
                Err(e) => toasts.error(format!("Could not delete link: {e}")),
            }
        });
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Manage links" }
                Button {
                    onclick: move |_| {
                        let next_position = links
                            .read()
                            .as_ref()
                            .and_then(|r| r.as_ref().ok())
                            .map(|all| all.iter().map(|l| l.position).max().unwrap_or(0) + 1)
                            .unwrap_or(0);
                        editing.set(Some(Editing {
                            id: None,
                            input: LinkInput { position: next_position, ..LinkInput::default() },
                        }));
                    },
                    "Add link"
                }
            }
            match &*links.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError { message: format!("Could not load links: {e}"), on_retry: move |_| links.restart() }
                },
                Some(Ok(all)) => {
                    let shown = listing::apply(all, &query());
                    rsx! {
                        ListControls {
                            query,
                            categories: listing::categories(all),
                            sort_options: vec![(SortKey::Position, "Position"), (SortKey::Title, "Title")],
                        }
                        table {
                            class: "admin-table",
                            thead {
                                tr { th { "#" } th { "Title" } th { "URL" } th { "Category" } th {} }
                            }
                            tbody {
                                for link in shown {
                                    tr {
                                        key: "{link.id}",
                                        td { "{link.position}" }
                                        td { "{link.title}" }
                                        td { class: "admin-table-url", "{link.url}" }
                                        td { {link.category.clone().unwrap_or_default()} }
                                        td {
                                            class: "admin-table-actions",
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: {
                                                    let link = link.clone();
                                                    move |_| editing.set(Some(Editing { id: Some(link.id.clone()), input: LinkInput::from(&link) }))
                                                },
                                                "Edit"
                                            }
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: {
                                                    let link = link.clone();
                                                    move |_| deleting.set(Some(link.clone()))
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
        if let Some(edit) = editing() {
            LinkForm {
                id: edit.id,
                initial: edit.input,
                on_close: move |saved: bool| {
                    editing.set(None);
                    if saved {
                        links.restart();
                    }
                },
            }
        }
        if let Some(link) = deleting() {
            ConfirmDialog {
                title: "Delete link?",
                message: format!("{} will be removed for everyone.", link.title),
                on_cancel: move |_| deleting.set(None),
                on_confirm: move |_| {
                    deleting.set(None);
                    delete(link.clone());
                },
            }
        }
    }
}

#[component]
fn LinkForm(#[props(!optional)] id: Option<String>, initial: LinkInput, on_close: EventHandler<bool>) -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let mut title = use_signal(|| initial.title.clone());
    let mut url = use_signal(|| initial.url.clone());
    let mut description = use_signal(|| initial.description.clone().unwrap_or_default());
    let mut category = use_signal(|| initial.category.clone().unwrap_or_default());
    let mut position = use_signal(|| initial.position);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let is_new = id.is_none();

    let save = move |_| {
        let client = client.clone();
        let id = id.clone();
        async move {
            if title().trim().is_empty() || url().trim().is_empty() {
                error.set(Some("Title and URL are required.".to_string()));
                return;
            }
            let input = LinkInput {
                title: title().trim().to_string(),
                url: url().trim().to_string(),
                description: non_blank(&description()),
                category: non_blank(&category()),
                position: position(),
            };
            saving.set(true);
            let result = match &id {
                Some(id) => client.update_link(id, &input).await,
                None => client.create_link(&input).await,
            };
            saving.set(false);
            match result {
                Ok(link) => {
                    toasts.success(format!("Saved {}", link.title));
                    on_close.call(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(false),
            div {
                class: "modal-body",
                h2 { class: "modal-title", if is_new { "Add link" } else { "Edit link" } }
                if let Some(message) = error() {
                    InlineError { message }
                }
                div { class: "field",
                    Label { html_for: "link-title", "Title" }
                    Input { id: "link-title", value: title(), oninput: move |e: FormEvent| title.set(e.value()) }
                }
                div { class: "field",
                    Label { html_for: "link-url", "URL" }
                    Input { id: "link-url", r#type: "url", value: url(), oninput: move |e: FormEvent| url.set(e.value()) }
                }
                div { class: "field",
                    Label { html_for: "link-description", "Description" }
                    Input { id: "link-description", value: description(), oninput: move |e: FormEvent| description.set(e.value()) }
                }
                div { class: "field",
                    Label { html_for: "link-category", "Category" }
                    Input { id: "link-category", value: category(), oninput: move |e: FormEvent| category.set(e.value()) }
                }
                div { class: "field",
                    Label { html_for: "link-position", "Position" }
                    Input {
                        id: "link-position",
                        r#type: "number",
                        value: "{position()}",
                        oninput: move |e: FormEvent| {
                            if let Ok(v) = e.value().parse::<i32>() {
                                position.set(v);
                            }
                        },
                    }
                }
                div {
                    class: "modal-actions",
                    Button { variant: ButtonVariant::Secondary, onclick: move |_| on_close.call(false), "Cancel" }
                    Button { disabled: saving(), onclick: save, if saving() { "Saving…" } else { "Save" } }
                }
            }
        }
    }
}
