use dioxus::prelude::*;
use domain::{DraftCanvas, DraftSource, DraftVersion};

use super::controller::use_canvas;
use crate::components::{Button, ButtonVariant, InlineError, Spinner};
use crate::context::use_api;
use crate::diff_view::DiffView;
use crate::toast::use_toasts;

#[derive(Clone, PartialEq)]
enum History {
    Hidden,
    Loading,
    Failed(String),
    Loaded(Vec<DraftVersion>),
}

fn source_label(source: &DraftSource) -> &'static str {
    match source {
        DraftSource::User => "You",
        DraftSource::Assistant => "Assistant",
    }
}

/// Saved draft versions of the active thread, loaded when opened.
#[component]
pub fn VersionHistory() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let handle = use_canvas();
    let mut history = use_signal(|| History::Hidden);
    let mut selected = use_signal(|| Option::<u32>::None);

    // A different thread means a different history.
    let active = use_memo(move || handle.selection.read().active().map(str::to_string));
    use_effect(move || {
        let _ = active();
        history.set(History::Hidden);
        selected.set(None);
    });

    let load = move |_| {
        let client = client.clone();
        async move {
            let Some(thread_id) = handle.active_id() else {
                return;
            };
            history.set(History::Loading);
            let result = client.draft_versions(&thread_id).await;
            if !handle.is_active(&thread_id) {
                return;
            }
            match result {
                Ok(versions) => history.set(History::Loaded(versions)),
                Err(e) => history.set(History::Failed(e.to_string())),
            }
        }
    };

    let canvas_text = (handle.canvas)()
        .map(|c| c.text().to_string())
        .unwrap_or_default();

    rsx! {
        section {
            class: "history",
            match history() {
                History::Hidden => rsx! {
                    Button { variant: ButtonVariant::Ghost, onclick: load.clone(), "Version history" }
                },
                History::Loading => rsx! { Spinner { label: "Loading versions…" } },
                History::Failed(message) => rsx! {
                    InlineError { message: format!("Could not load versions: {message}") }
                    Button { variant: ButtonVariant::Ghost, onclick: load.clone(), "Retry" }
                },
                History::Loaded(versions) => {
                    let latest = versions.iter().map(|v| v.version).max().unwrap_or(0);
                    let chosen = selected().and_then(|n| versions.iter().find(|v| v.version == n).cloned());
                    let chosen_text = chosen.as_ref().map(|v| v.text.clone()).unwrap_or_default();
                    rsx! {
                        div {
                            class: "history-header",
                            h3 { class: "view-section-title", "Versions" }
                            Button { variant: ButtonVariant::Ghost, onclick: move |_| history.set(History::Hidden), "Close" }
                        }
                        if versions.is_empty() {
                            p { class: "view-muted", "No saved versions yet." }
                        }
                        ul {
                            class: "history-list",
                            for v in versions.iter() {
                                li {
                                    key: "{v.version}",
                                    button {
                                        class: if selected() == Some(v.version) { "history-item history-item--active" } else { "history-item" },
                                        onclick: {
                                            let n = v.version;
                                            move |_| selected.set(Some(n))
                                        },
                                        "v{v.version} · {source_label(&v.source)} · {v.created_at}"
                                        if v.version == latest { " (latest)" }
                                    }
                                }
                            }
                        }
                        if let Some(version) = chosen {
                            DiffView { old: chosen_text, new: canvas_text.clone() }
                            if DraftCanvas::can_restore(version.version, latest) {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| {
                                        handle.restore(version.text.clone());
                                        toasts.info(format!("Restored v{} to the canvas", version.version));
                                    },
                                    "Restore this version"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
