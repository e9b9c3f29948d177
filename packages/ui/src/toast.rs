//! Toast notifications.
//!
//! Rendering, stacking and auto-dismiss come from
//! `dioxus_primitives::toast`. [`Toasts`] wraps its handle so every toast
//! gets the configured duration and error toasts are also logged.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{self, use_toast, ToastOptions};

#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    inner: CopyValue<toast::Toasts>,
    duration_ms: u32,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.inner.read().success(message.into(), self.options());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.inner.read().error(message, self.options());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.inner.read().info(message.into(), self.options());
    }

    fn options(&self) -> ToastOptions {
        ToastOptions::new().duration(Duration::from_millis(self.duration_ms as u64))
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(#[props(default = 4000)] duration_ms: u32, children: Element) -> Element {
    rsx! {
        toast::ToastProvider {
            ToastScope { duration_ms, {children} }
        }
    }
}

/// Lives under the primitive provider so `use_toast` can find it.
#[component]
fn ToastScope(duration_ms: u32, children: Element) -> Element {
    let inner = use_toast();
    use_context_provider(|| Toasts {
        inner: CopyValue::new(inner),
        duration_ms,
    });
    rsx! { {children} }
}
