use dioxus::prelude::*;
use domain::{AppKey, GuestGrant, GuestGrantInput};

use super::{non_blank, AppChecklist};
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyState, InlineError, Input, Label, Spinner,
};
use crate::context::use_api;
use crate::toast::use_toasts;

fn app_labels(apps: &[AppKey]) -> String {
    apps.iter().map(|a| a.label()).collect::<Vec<_>>().join(", ")
}

/// External people granted access to selected apps.
#[component]
pub fn AdminGuestsView() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let mut revoking = use_signal(|| Option::<GuestGrant>::None);
    let mut email = use_signal(String::new);
    let mut apps = use_signal(Vec::<AppKey>::new);
    let mut expires_at = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let list_client = client.clone();
    let mut grants = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_guests().await }
    });

    let create_client = client.clone();
    let create = move |evt: FormEvent| {
        evt.prevent_default();
        let client = create_client.clone();
        async move {
            let address = email().trim().to_lowercase();
            if !address.contains('@') {
                form_error.set(Some("Enter a valid email address.".to_string()));
                return;
            }
            if apps().is_empty() {
                form_error.set(Some("Pick at least one app.".to_string()));
                return;
            }
            form_error.set(None);
            let input = GuestGrantInput {
                email: address,
                apps: apps(),
                expires_at: non_blank(&expires_at()),
            };
            match client.create_guest(&input).await {
                Ok(grant) => {
                    toasts.success(format!("Invited {}", grant.email));
                    email.set(String::new());
                    apps.set(Vec::new());
                    expires_at.set(String::new());
                    grants.restart();
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
        }
    };

    let revoke = move |grant: GuestGrant| {
        let client = client.clone();
        spawn(async move {
            match client.revoke_guest(&grant.id).await {
                Ok(()) => {
                    toasts.success(format!("Revoked access for {}", grant.email));
                    grants.restart();
                }
                Err(e) => toasts.error(format!("Could not revoke access: {e}")),
            }
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Guests" }
            form {
                class: "guest-form",
                onsubmit: create,
                h2 { class: "view-section-title", "Invite a guest" }
                if let Some(message) = form_error() {
                    InlineError { message }
                }
                div { class: "field",
                    Label { html_for: "guest-email", "Email" }
                    Input { id: "guest-email", r#type: "email", value: email(), oninput: move |e: FormEvent| email.set(e.value()) }
                }
                div { class: "field",
                    Label { "Apps" }
                    AppChecklist { selected: apps(), on_change: move |next: Vec<AppKey>| apps.set(next) }
                }
                div { class: "field",
                    Label { html_for: "guest-expires", "Expires (optional)" }
                    Input { id: "guest-expires", r#type: "date", value: expires_at(), oninput: move |e: FormEvent| expires_at.set(e.value()) }
                }
                Button { r#type: "submit", "Invite" }
            }
            match &*grants.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError { message: format!("Could not load guests: {e}"), on_retry: move |_| grants.restart() }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { title: "No guests", message: "Nobody outside the company has access." }
                },
                Some(Ok(list)) => rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr { th { "Email" } th { "Apps" } th { "Expires" } th {} }
                        }
                        tbody {
                            for grant in list.iter().cloned() {
                                tr {
                                    key: "{grant.id}",
                                    td { "{grant.email}" }
                                    td { {app_labels(&grant.apps)} }
                                    td { {grant.expires_at.clone().unwrap_or_else(|| "never".to_string())} }
                                    td {
                                        class: "admin-table-actions",
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| revoking.set(Some(grant.clone())),
                                            "Revoke"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
        if let Some(grant) = revoking() {
            ConfirmDialog {
                title: "Revoke access?",
                message: format!("{} will no longer be able to sign in.", grant.email),
                confirm_label: "Revoke",
                on_cancel: move |_| revoking.set(None),
                on_confirm: move |_| {
                    revoking.set(None);
                    revoke(grant.clone());
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_labels() {
        assert_eq!(app_labels(&[AppKey::Wiki, AppKey::BrandVoice]), "Wiki, Brand Voice");
        assert_eq!(app_labels(&[]), "");
    }
}
