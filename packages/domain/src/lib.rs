//! # Domain crate: portal logic shared by the client crates
//!
//! Everything in here is plain Rust with no browser or HTTP dependencies, so
//! it is unit-tested natively while the `ui` and `web` crates compile it to
//! WebAssembly.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | DTOs mirrored from the portal API |
//! | [`config`] | `portal.toml` settings |
//! | [`access`] | Session state and route guard decisions |
//! | [`template_vars`] | `{{variable}}` extraction and substitution |
//! | [`canvas`] | Brand-voice draft canvas state machine |
//! | [`listing`] | Search / filter / sort over client-side lists |
//! | [`diff`] | Line diff for version history |
//! | [`recovery`] | Stale-chunk detection for the error boundary |

pub mod access;
pub mod canvas;
pub mod config;
pub mod diff;
pub mod listing;
pub mod models;
pub mod recovery;
pub mod template_vars;

pub use access::{decide, Access, AuthState, Requirement, SessionFailure};
pub use canvas::{AutosaveTicket, DraftCanvas, SaveRequest, SaveStatus, ThreadSelection};
pub use config::PortalConfig;
pub use models::*;
