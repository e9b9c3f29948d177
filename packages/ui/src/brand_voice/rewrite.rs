use dioxus::prelude::*;
use domain::{RewriteMode, RewriteRequest};

use super::controller::use_canvas;
use crate::components::{Button, ButtonVariant, Label, Textarea};
use crate::context::use_api;
use crate::js::copy_to_clipboard;
use crate::toast::use_toasts;

/// One-shot rewrite of arbitrary text in the brand voice.
#[component]
pub fn RewritePanel() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let handle = use_canvas();
    let mut input = use_signal(String::new);
    let mut mode = use_signal(|| RewriteMode::Rewrite);
    let mut output = use_signal(|| Option::<String>::None);
    let mut running = use_signal(|| false);

    let run_client = client.clone();
    let run = move |_| {
        let client = run_client.clone();
        async move {
            let text = input().trim().to_string();
            if text.is_empty() {
                return;
            }
            running.set(true);
            let request = RewriteRequest {
                text,
                mode: mode(),
                thread_id: handle.active_id(),
            };
            match client.rewrite(&request).await {
                Ok(response) => {
                    output.set(Some(response.output));
                    if let Some(thread) = response.thread {
                        handle.server_thread(thread);
                    }
                }
                Err(e) => toasts.error(format!("Rewrite failed: {e}")),
            }
            running.set(false);
        }
    };

    let has_canvas = (handle.canvas)().is_some();

    rsx! {
        section {
            class: "rewrite",
            div {
                class: "rewrite-modes",
                for m in RewriteMode::all() {
                    Button {
                        key: "{m.label()}",
                        variant: if mode() == m { ButtonVariant::Secondary } else { ButtonVariant::Ghost },
                        onclick: move |_| mode.set(m),
                        "{m.label()}"
                    }
                }
            }
            Label { html_for: "rewrite-input", "Text" }
            Textarea {
                id: "rewrite-input",
                rows: 6,
                placeholder: "Paste text to rewrite…",
                value: input(),
                oninput: move |evt: FormEvent| input.set(evt.value()),
            }
            Button {
                disabled: running() || input().trim().is_empty(),
                onclick: run,
                if running() { "Working…" } else { "{mode().label()}" }
            }
            if let Some(result) = output() {
                div {
                    class: "rewrite-output",
                    pre { "{result}" }
                    div {
                        class: "rewrite-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                let text = output().unwrap_or_default();
                                spawn(async move {
                                    if copy_to_clipboard(&text).await {
                                        toasts.success("Copied");
                                    } else {
                                        toasts.error("Clipboard is not available");
                                    }
                                });
                            },
                            "Copy"
                        }
                        if has_canvas {
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| {
                                    if let Some(text) = output() {
                                        handle.edit(&client, text);
                                    }
                                },
                                "Use in canvas"
                            }
                        }
                    }
                }
            }
        }
    }
}
