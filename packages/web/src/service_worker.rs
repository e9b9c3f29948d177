use dioxus::prelude::*;

const REGISTER_JS: &str = r#"
if ('serviceWorker' in navigator) {
    navigator.serviceWorker.register('/sw.js')
        .then(function(reg) { dioxus.send('registered with scope ' + reg.scope); })
        .catch(function(err) { dioxus.send('failed: ' + err); });
} else {
    dioxus.send('unsupported');
}
"#;

/// Register `/sw.js` once at startup. Browser builds only.
pub fn register() {
    if !cfg!(target_arch = "wasm32") {
        return;
    }
    spawn(async move {
        let mut eval = document::eval(REGISTER_JS);
        match eval.recv::<String>().await {
            Ok(status) if status.starts_with("failed") => {
                tracing::warn!("service worker {status}");
            }
            Ok(status) => tracing::info!("service worker {status}"),
            Err(e) => tracing::warn!("service worker registration did not report back: {e}"),
        }
    });
}
