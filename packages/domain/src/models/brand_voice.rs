//! # Brand voice threads and drafts
//!
//! A [`BrandVoiceThread`] is a saved drafting session: the chat history with
//! the assistant plus the current canvas draft. Every save (by the user or by
//! the assistant) produces a new [`DraftVersion`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

/// Thread as listed in the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandVoiceThread {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<ThreadMessage>,
    /// Latest server-side draft text.
    #[serde(default)]
    pub draft: String,
    #[serde(default)]
    pub draft_version: u32,
    #[serde(default)]
    pub updated_at: String,
}

impl BrandVoiceThread {
    pub fn summary(&self) -> ThreadSummary {
        ThreadSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

/// Who produced a draft version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftSource {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftVersion {
    pub version: u32,
    pub text: String,
    #[serde(default)]
    pub created_at: String,
    pub source: DraftSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteMode {
    Rewrite,
    Draft,
    Shorten,
    Proofread,
}

impl RewriteMode {
    pub fn all() -> [RewriteMode; 4] {
        [
            RewriteMode::Rewrite,
            RewriteMode::Draft,
            RewriteMode::Shorten,
            RewriteMode::Proofread,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RewriteMode::Rewrite => "Rewrite",
            RewriteMode::Draft => "Draft",
            RewriteMode::Shorten => "Shorten",
            RewriteMode::Proofread => "Proofread",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub text: String,
    pub mode: RewriteMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub output: String,
    /// Updated thread when the rewrite was attached to one.
    #[serde(default)]
    pub thread: Option<BrandVoiceThread>,
}
