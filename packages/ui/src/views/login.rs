use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{Button, InlineError, Input, Label};
use crate::context::use_api;
use crate::paths;

#[component]
pub fn LoginView() -> Element {
    let mut auth = use_auth();
    let client = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already signed in: nothing to do here.
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            nav.replace(paths::HOME);
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            if email().trim().is_empty() || password().is_empty() {
                error.set(Some("Enter your email and password.".to_string()));
                return;
            }
            submitting.set(true);
            error.set(None);
            match client.login(&email(), &password()).await {
                Ok(user) => {
                    tracing::info!("signed in as {}", user.email);
                    password.set(String::new());
                    auth.write().apply_current_user(Ok(user));
                    nav.replace(paths::HOME);
                }
                Err(e) => {
                    let message = if e.is_unauthorized() {
                        "Email or password is incorrect.".to_string()
                    } else {
                        e.to_string()
                    };
                    error.set(Some(message));
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        div {
            class: "login-page",
            form {
                class: "login-card",
                onsubmit,
                h1 { class: "view-title", "Sign in" }
                if let Some(message) = error() {
                    InlineError { message }
                }
                div {
                    class: "field",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "field",
                    Label { html_for: "password", "Password" }
                    Input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                Button {
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in…" } else { "Sign in" }
                }
            }
        }
    }
}
