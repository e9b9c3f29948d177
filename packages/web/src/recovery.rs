//! Reload the page when a rotated asset fails to load, at most once per
//! cooldown window.

use dioxus::prelude::*;
use domain::recovery::is_stale_chunk_error;
#[cfg(target_arch = "wasm32")]
use domain::recovery::{ReloadGuard, RELOAD_MARKER_KEY};

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Reload if `message` names a stale asset and the guard allows it.
/// Returns whether a reload was started.
pub fn reload_if_stale(message: &str, cooldown_ms: u64) -> bool {
    if !is_stale_chunk_error(message) {
        return false;
    }
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now() as u64;
        let storage = session_storage();
        let last = storage
            .as_ref()
            .and_then(|s| s.get_item(RELOAD_MARKER_KEY).ok().flatten());
        if !ReloadGuard::new(cooldown_ms).should_reload(now, last.as_deref()) {
            tracing::warn!("stale asset detected again within cooldown, not reloading");
            return false;
        }
        if let Some(storage) = storage {
            let _ = storage.set_item(RELOAD_MARKER_KEY, &ReloadGuard::marker(now));
        }
        tracing::info!("stale asset detected, reloading: {message}");
        ui::js::reload_page();
        true
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = cooldown_ms;
        false
    }
}

/// Watch window `error` and `unhandledrejection` events for failed asset
/// loads that happen outside rendering.
pub fn use_stale_asset_listener(cooldown_ms: u64) {
    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            window.addEventListener('error', function(e) {
                dioxus.send(String((e && (e.message || (e.error && e.error.message))) || ''));
            });
            window.addEventListener('unhandledrejection', function(e) {
                var r = e && e.reason;
                dioxus.send(String((r && (r.message || r)) || ''));
            });
            "#,
        );
        while let Ok(message) = eval.recv::<String>().await {
            if reload_if_stale(&message, cooldown_ms) {
                break;
            }
        }
    });
}

/// Fallback shown by the top-level error boundary.
#[component]
pub fn RenderError(message: String, cooldown_ms: u64) -> Element {
    let reloading = use_hook(|| {
        tracing::error!("render failed: {message}");
        reload_if_stale(&message, cooldown_ms)
    });

    if reloading {
        return rsx! {
            div { class: "fatal-error", p { "A new version is available. Reloading…" } }
        };
    }

    rsx! {
        div {
            class: "fatal-error",
            role: "alert",
            h1 { class: "view-title", "Something went wrong" }
            pre { class: "fatal-error-message", "{message}" }
            button {
                class: "btn btn--primary",
                onclick: move |_| ui::js::reload_page(),
                "Reload"
            }
        }
    }
}
