use dioxus::prelude::*;
use domain::MessageRole;

use super::controller::use_canvas;
use crate::components::{Button, Textarea};
use crate::context::use_api;
use crate::toast::use_toasts;

fn message_class(role: &MessageRole) -> &'static str {
    match role {
        MessageRole::User => "chat-message chat-message--user",
        MessageRole::Assistant => "chat-message chat-message--assistant",
    }
}

/// Conversation with the assistant. Replies may carry a new draft.
#[component]
pub fn ChatPanel() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let handle = use_canvas();
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let Some(thread) = (handle.thread)() else {
        return rsx! {};
    };
    let thread_id = thread.id.clone();

    let send = move |_| {
        let client = client.clone();
        let thread_id = thread_id.clone();
        async move {
            let content = message().trim().to_string();
            if content.is_empty() || sending() {
                return;
            }
            sending.set(true);
            match client.send_message(&thread_id, &content).await {
                Ok(thread) => {
                    message.set(String::new());
                    handle.server_thread(thread);
                }
                Err(e) => toasts.error(format!("Message not sent: {e}")),
            }
            sending.set(false);
        }
    };

    rsx! {
        section {
            class: "chat",
            div {
                class: "chat-messages",
                if thread.messages.is_empty() {
                    p { class: "view-muted", "Ask for a draft or give feedback on the current one." }
                }
                for (i, msg) in thread.messages.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: message_class(&msg.role),
                        "{msg.content}"
                    }
                }
            }
            div {
                class: "chat-compose",
                Textarea {
                    rows: 3,
                    placeholder: "Message the assistant…",
                    value: message(),
                    disabled: sending(),
                    oninput: move |evt: FormEvent| message.set(evt.value()),
                }
                Button {
                    disabled: sending() || message().trim().is_empty(),
                    onclick: send,
                    if sending() { "Sending…" } else { "Send" }
                }
            }
        }
    }
}
