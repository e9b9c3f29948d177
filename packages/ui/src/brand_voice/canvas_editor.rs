use dioxus::prelude::*;
use domain::SaveStatus;

use super::controller::use_canvas;
use crate::components::{Button, ButtonVariant, Textarea};
use crate::context::use_api;
use crate::js::copy_to_clipboard;
use crate::toast::use_toasts;

/// The editable draft with its save state, pending server update and undo.
#[component]
pub fn CanvasEditor() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let handle = use_canvas();

    let canvas = (handle.canvas)();
    let Some(canvas) = canvas else {
        return rsx! {};
    };

    let status = canvas.status();
    let status_class = match status {
        SaveStatus::Unsaved => "save-status save-status--unsaved",
        SaveStatus::Saving => "save-status save-status--saving",
        SaveStatus::Saved => "save-status save-status--saved",
        SaveStatus::Idle => "save-status",
    };
    let text = canvas.text().to_string();
    let copy_text = text.clone();
    let edit_client = client.clone();
    let undo_client = client.clone();
    let apply_client = client.clone();
    let save_client = client.clone();

    rsx! {
        section {
            class: "canvas",
            div {
                class: "canvas-toolbar",
                span { class: "{status_class}", "{status.label()}" }
                if let Some(error) = canvas.last_error() {
                    span { class: "inline-error", title: "{error}", "Last save failed" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: !canvas.can_undo(),
                    onclick: move |_| handle.undo(&undo_client),
                    "Undo"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        let text = copy_text.clone();
                        spawn(async move {
                            if copy_to_clipboard(&text).await {
                                toasts.success("Draft copied");
                            } else {
                                toasts.error("Clipboard is not available");
                            }
                        });
                    },
                    "Copy"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: !canvas.has_local_edits() || canvas.is_saving(),
                    onclick: move |_| handle.save_now(&save_client),
                    "Save"
                }
            }
            if canvas.pending_update().is_some() {
                div {
                    class: "canvas-pending",
                    span { "A newer draft arrived while you were editing." }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| handle.apply_pending(&apply_client),
                        "Use new draft"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| handle.dismiss_pending(),
                        "Keep mine"
                    }
                }
            }
            Textarea {
                class: "canvas-input",
                rows: 18,
                placeholder: "Your draft appears here.",
                value: text,
                oninput: move |evt: FormEvent| handle.edit(&edit_client, evt.value()),
            }
        }
    }
}
