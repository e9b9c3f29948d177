//! Brand voice workspace: threads, the draft canvas, chat and rewrite.

mod canvas_editor;
mod chat;
mod controller;
mod history;
mod rewrite;
mod threads;

pub use canvas_editor::CanvasEditor;
pub use chat::ChatPanel;
pub use controller::{use_canvas, use_canvas_provider, CanvasHandle};
pub use history::VersionHistory;
pub use rewrite::RewritePanel;
pub use threads::ThreadList;

use dioxus::prelude::*;

use crate::components::{EmptyState, InlineError, Spinner};
use crate::context::{use_api, use_config};
use crate::toast::use_toasts;

#[component]
pub fn BrandVoiceView() -> Element {
    let client = use_api();
    let config = use_config();
    let toasts = use_toasts();
    let handle = use_canvas_provider(toasts, config.autosave.debounce_ms, config.drafts.undo_limit);

    let thread = (handle.thread)();
    let selection = (handle.selection)();
    let body = if selection.is_loading() {
        rsx! { Spinner { label: "Loading thread…" } }
    } else if let Some(error) = selection.error() {
        rsx! {
            InlineError {
                message: format!("Could not load thread: {error}"),
                on_retry: move |_| {
                    let client = client.clone();
                    spawn(async move { handle.retry(client).await });
                },
            }
        }
    } else if let Some(thread) = thread {
        rsx! {
            h2 { class: "view-section-title", "{thread.title}" }
            CanvasEditor {}
            VersionHistory {}
            ChatPanel {}
        }
    } else {
        rsx! {
            EmptyState {
                title: "Pick a thread",
                message: "Select a thread on the left or start a new one to work on a draft.",
            }
        }
    };

    rsx! {
        div {
            class: "view-page brand-voice",
            h1 { class: "view-title", "Brand voice" }
            div {
                class: "brand-voice-layout",
                ThreadList {}
                main { class: "brand-voice-main", {body} }
                RewritePanel {}
            }
        }
    }
}
