//! Session context for the UI.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use domain::{AuthState, SessionFailure};

use crate::context::use_api;
use crate::timer::sleep_ms;

const SESSION_CHECK_MS: u32 = 60_000;

/// Get the session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

fn session_failure(err: &ApiError) -> SessionFailure {
    if err.is_unauthorized() {
        SessionFailure::Unauthorized
    } else {
        SessionFailure::Other
    }
}

/// Ask the server who is signed in and fold the answer into `auth`.
pub async fn refresh_user(mut auth: Signal<AuthState>, client: &ApiClient) {
    let result = client.current_user().await.map_err(|e| {
        if !e.is_unauthorized() {
            tracing::warn!("current user check failed: {e}");
        }
        session_failure(&e)
    });
    let mut next = auth();
    next.apply_current_user(result);
    if next != auth() {
        auth.set(next);
    }
}

/// Provider component that manages the session.
/// Requires an [`ApiClient`] in context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    let client = use_api();

    // Fetch the current user on mount
    let initial = client.clone();
    let _ = use_resource(move || {
        let client = initial.clone();
        async move { refresh_user(auth_state, &client).await }
    });

    // Periodic session check
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            loop {
                sleep_ms(SESSION_CHECK_MS).await;
                if auth_state.peek().loading {
                    continue;
                }
                refresh_user(auth_state, &client).await;
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let client = use_api();
    let toasts = crate::use_toasts();
    let nav = use_navigator();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            match client.logout().await {
                Ok(()) => tracing::info!("signed out"),
                // Already signed out server-side.
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    toasts.error(format!("Sign out failed: {e}"));
                    return;
                }
            }
            auth_state.write().logged_out();
            nav.replace(crate::paths::LOGIN);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
