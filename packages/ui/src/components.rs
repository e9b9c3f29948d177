//! Small presentational building blocks shared by the views.

use dioxus::prelude::*;
use dioxus_primitives::alert_dialog::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Secondary => "btn btn--secondary",
            ButtonVariant::Ghost => "btn btn--ghost",
            ButtonVariant::Destructive => "btn btn--destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    #[props(default = "button".to_string())] r#type: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{r#type}",
            title: "{title}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "field-label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "field-input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            required,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default = 6)] rows: u32,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "field-textarea {class}",
            placeholder: "{placeholder}",
            rows: "{rows}",
            value: "{value}",
            disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Asks before a destructive action. Closing the dialog any other way than
/// the confirm button counts as cancel.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            class: "modal-backdrop",
            open: Some(true),
            on_open_change: move |open: bool| {
                if !open {
                    on_cancel.call(());
                }
            },
            AlertDialogContent {
                class: "modal-card modal-body",
                AlertDialogTitle { class: "modal-title", "{title}" }
                AlertDialogDescription { class: "view-muted", "{message}" }
                AlertDialogActions {
                    class: "modal-actions",
                    AlertDialogCancel { class: "btn btn--secondary", "Cancel" }
                    AlertDialogAction {
                        class: "btn btn--destructive",
                        on_click: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Spinner(#[props(default = "Loading…".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "status",
            span { class: "spinner-dot" }
            span { class: "view-muted", "{label}" }
        }
    }
}

/// Error text shown in place of content that failed to load.
#[component]
pub fn InlineError(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "inline-error",
            role: "alert",
            span { "{message}" }
            if let Some(retry) = on_retry {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(title: String, #[props(default)] message: String, children: Element) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h2 { class: "view-section-title", "{title}" }
            if !message.is_empty() {
                p { class: "view-muted", "{message}" }
            }
            {children}
        }
    }
}
