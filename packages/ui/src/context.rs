//! Shared services provided at the root of the component tree.

use api::ApiClient;
use dioxus::prelude::*;
use domain::PortalConfig;

/// The API client provided by [`PortalProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Parsed `portal.toml`.
pub fn use_config() -> PortalConfig {
    use_context::<PortalConfig>()
}

/// Provides the config, the API client built from it, toasts and the
/// session. Wrap the router with this component.
#[component]
pub fn PortalProvider(config: PortalConfig, children: Element) -> Element {
    let toast_ms = config.toasts.duration_ms;
    let base_url = config.api.base_url.clone();
    use_context_provider(|| config);
    use_context_provider(|| ApiClient::http(&base_url));

    rsx! {
        crate::ToastProvider {
            duration_ms: toast_ms,
            crate::AuthProvider {
                {children}
            }
        }
    }
}
