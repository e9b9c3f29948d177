//! Connectivity banner.

use dioxus::prelude::*;

use crate::Icon;
use crate::auth::use_auth;
use crate::icons::FaCloudArrowUp;
use crate::js::reload_page;

/// Shown while the browser reports no network or the last session check
/// could not reach the server.
#[component]
pub fn OfflineBanner() -> Element {
    let auth = use_auth();
    let mut browser_online = use_signal(|| true);

    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            dioxus.send(navigator.onLine);
            window.addEventListener('online', function() { dioxus.send(true); });
            window.addEventListener('offline', function() { dioxus.send(false); });
            "#,
        );
        while let Ok(online) = eval.recv::<bool>().await {
            if !online {
                tracing::warn!("browser went offline");
            }
            browser_online.set(online);
        }
    });

    let state = auth();
    if state.loading || (browser_online() && state.online) {
        return rsx! {};
    }

    rsx! {
        div {
            class: "offline-banner",
            role: "alert",
            Icon { icon: FaCloudArrowUp, width: 14, height: 14 }
            span { "You're offline. Changes can't be saved until the connection is back." }
            button {
                class: "btn btn--ghost",
                onclick: move |_| reload_page(),
                "Retry"
            }
        }
    }
}
