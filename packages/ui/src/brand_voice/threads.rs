use dioxus::prelude::*;
use domain::ThreadSummary;

use super::controller::use_canvas;
use crate::Icon;
use crate::components::{Button, ButtonVariant, ConfirmDialog, InlineError, Input, Spinner};
use crate::context::use_api;
use crate::icons::FaTrashCan;
use crate::toast::use_toasts;

/// Sidebar listing the user's threads.
#[component]
pub fn ThreadList() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let handle = use_canvas();
    let mut new_title = use_signal(String::new);
    let mut confirm_delete = use_signal(|| Option::<ThreadSummary>::None);

    let list_client = client.clone();
    let mut threads = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_threads().await }
    });

    let create_client = client.clone();
    let create = move |_| {
        let client = create_client.clone();
        async move {
            let title = match new_title().trim() {
                "" => "Untitled".to_string(),
                t => t.to_string(),
            };
            match client.create_thread(&title).await {
                Ok(thread) => {
                    new_title.set(String::new());
                    threads.restart();
                    handle.open(client, thread.id).await;
                }
                Err(e) => toasts.error(format!("Could not create thread: {e}")),
            }
        }
    };

    let delete_client = client.clone();
    let delete = move |summary: ThreadSummary| {
        let client = delete_client.clone();
        spawn(async move {
            match client.delete_thread(&summary.id).await {
                Ok(()) => {
                    if handle.is_active(&summary.id) {
                        handle.close();
                    }
                    toasts.success(format!("Deleted \u{201c}{}\u{201d}", summary.title));
                    threads.restart();
                }
                Err(e) => toasts.error(format!("Could not delete thread: {e}")),
            }
        });
    };

    let active = handle.selection.read().active().map(str::to_string);

    rsx! {
        aside {
            class: "thread-list",
            div {
                class: "thread-list-create",
                Input {
                    placeholder: "New thread title",
                    value: new_title(),
                    oninput: move |evt: FormEvent| new_title.set(evt.value()),
                }
                Button { onclick: create, "New" }
            }
            match &*threads.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError { message: format!("Could not load threads: {e}") }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| threads.restart(),
                        "Retry loading threads"
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "view-muted", "No threads yet." }
                },
                Some(Ok(list)) => rsx! {
                    ul {
                        for summary in list.iter().cloned() {
                            ThreadRow {
                                key: "{summary.id}",
                                selected: active.as_deref() == Some(summary.id.as_str()),
                                summary: summary.clone(),
                                on_select: {
                                    let client = client.clone();
                                    move |id: String| {
                                        let client = client.clone();
                                        spawn(async move { handle.open(client, id).await });
                                    }
                                },
                                on_delete: move |s: ThreadSummary| confirm_delete.set(Some(s)),
                            }
                        }
                    }
                },
            }
        }
        if let Some(summary) = confirm_delete() {
            ConfirmDialog {
                title: "Delete thread?",
                message: format!("\u{201c}{}\u{201d} and its draft history will be removed.", summary.title),
                on_cancel: move |_| confirm_delete.set(None),
                on_confirm: move |_| {
                    confirm_delete.set(None);
                    delete(summary.clone());
                },
            }
        }
    }
}

#[component]
fn ThreadRow(
    summary: ThreadSummary,
    selected: bool,
    on_select: EventHandler<String>,
    on_delete: EventHandler<ThreadSummary>,
) -> Element {
    let id = summary.id.clone();
    let row = summary.clone();
    let class = if selected { "thread-row thread-row--active" } else { "thread-row" };
    rsx! {
        li {
            class: "{class}",
            button {
                class: "thread-row-title",
                onclick: move |_| on_select.call(id.clone()),
                "{summary.title}"
            }
            button {
                class: "btn btn--ghost",
                title: "Delete thread",
                onclick: move |_| on_delete.call(row.clone()),
                Icon { icon: FaTrashCan, width: 12, height: 12 }
            }
        }
    }
}
