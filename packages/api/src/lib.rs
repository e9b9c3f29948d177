//! # API crate: typed client for the portal REST API
//!
//! The backend lives elsewhere; this crate is the browser's view of it.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`ApiError`] and the error-body message extraction |
//! | [`transport`] | [`Transport`] seam and the `reqwest`-backed [`HttpTransport`] |
//! | [`client`] | [`ApiClient`] and the shared response contract |
//! | `auth`, `links`, `wiki`, `templates`, `brand_voice`, `admin` | Endpoint methods on [`ApiClient`] |
//! | `mock` | `MockTransport` for tests, behind the `mock` feature |
//!
//! All requests go to same-origin paths (`/api/...`) with cookie credentials.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod transport;

mod admin;
mod auth;
mod brand_voice;
mod links;
mod templates;
mod wiki;

pub use client::ApiClient;
pub use error::{error_message, ApiError};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
pub use transport::{api_path, ApiRequest, ApiResponse, HttpTransport, Method, RequestBody, Transport};
