//! # Domain models mirrored from the portal API
//!
//! Every type here is a plain value object received from or sent to the
//! server. The client never holds authoritative state, so none of these
//! types carry behaviour beyond small display helpers.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`user`] | [`User`], [`AppKey`], [`LoginRequest`] |
//! | [`link`] | [`Link`], [`LinkInput`] |
//! | [`wiki`] | [`WikiPage`], [`WikiPageSummary`], [`WikiPageInput`], [`ImageUpload`] |
//! | [`template`] | [`Template`], [`TemplateInput`], [`TemplateVersion`] |
//! | [`brand_voice`] | [`BrandVoiceThread`], [`ThreadSummary`], [`DraftVersion`], rewrite request/response |
//! | [`admin`] | [`GuestGrant`], [`AdminUser`], [`BrandRule`] and their inputs |

pub mod admin;
pub mod brand_voice;
pub mod link;
pub mod template;
pub mod user;
pub mod wiki;

pub use admin::{AdminUser, AdminUserUpdate, BrandRule, BrandRuleInput, GuestGrant, GuestGrantInput};
pub use brand_voice::{
    BrandVoiceThread, DraftSource, DraftVersion, MessageRole, RewriteMode, RewriteRequest,
    RewriteResponse, ThreadMessage, ThreadSummary,
};
pub use link::{Link, LinkInput};
pub use template::{Template, TemplateInput, TemplateVersion};
pub use user::{AppKey, LoginRequest, User};
pub use wiki::{ImageUpload, WikiPage, WikiPageInput, WikiPageSummary};
