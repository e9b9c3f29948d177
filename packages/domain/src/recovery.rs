//! # Recovery from stale deployed assets
//!
//! After a deploy the hashed wasm/js bundles are rotated. A tab that is still
//! running the old build fails when it lazily fetches an asset that no longer
//! exists. [`is_stale_chunk_error`] recognises those failures so the error
//! boundary can reload the page; [`ReloadGuard`] keeps that reload from
//! looping when the failure has another cause.

const STALE_CHUNK_MARKERS: &[&str] = &[
    "failed to fetch dynamically imported module",
    "importing a module script failed",
    "error loading dynamically imported module",
    "chunkloaderror",
    "webassembly.instantiate",
    "webassembly.compile",
    "incorrect response mime type",
];

/// Whether `message` describes a failed load of a rotated asset.
pub fn is_stale_chunk_error(message: &str) -> bool {
    let lower = message.to_lowercase();
    if STALE_CHUNK_MARKERS.iter().any(|m| lower.contains(m)) {
        return true;
    }
    // "Loading chunk 42 failed", "Loading CSS chunk app failed"
    if let Some(start) = lower.find("loading ") {
        let rest = &lower[start..];
        if let Some(chunk) = rest.find("chunk") {
            return rest[chunk..].contains("failed");
        }
    }
    false
}

/// Storage key remembering the last automatic reload.
pub const RELOAD_MARKER_KEY: &str = "portal:last-chunk-reload";

/// Rate limit for automatic reloads, keyed by wall-clock milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadGuard {
    pub cooldown_ms: u64,
}

impl ReloadGuard {
    pub fn new(cooldown_ms: u64) -> Self {
        Self { cooldown_ms }
    }

    /// `last_reload` is the stored marker, if any.
    pub fn should_reload(&self, now_ms: u64, last_reload: Option<&str>) -> bool {
        match last_reload.and_then(|v| v.parse::<u64>().ok()) {
            Some(last) => now_ms.saturating_sub(last) >= self.cooldown_ms,
            None => true,
        }
    }

    pub fn marker(now_ms: u64) -> String {
        now_ms.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognises_browser_messages() {
        assert!(is_stale_chunk_error(
            "TypeError: Failed to fetch dynamically imported module: https://x/assets/app-1a2b.js"
        ));
        assert!(is_stale_chunk_error("Importing a module script failed."));
        assert!(is_stale_chunk_error("Loading chunk 42 failed."));
        assert!(is_stale_chunk_error("ChunkLoadError: Loading CSS chunk main failed"));
        assert!(is_stale_chunk_error(
            "WebAssembly.instantiateStreaming(): Incorrect response MIME type"
        ));
    }

    #[test]
    fn test_ignores_ordinary_errors() {
        assert!(!is_stale_chunk_error("HTTP 500"));
        assert!(!is_stale_chunk_error("Loading templates..."));
        assert!(!is_stale_chunk_error("index out of bounds"));
    }

    #[test]
    fn test_reload_guard_cooldown() {
        let guard = ReloadGuard::new(10_000);
        assert!(guard.should_reload(50_000, None));
        assert!(guard.should_reload(50_000, Some("garbage")));
        assert!(!guard.should_reload(50_000, Some("45000")));
        assert!(guard.should_reload(55_000, Some(&ReloadGuard::marker(45_000))));
    }
}
