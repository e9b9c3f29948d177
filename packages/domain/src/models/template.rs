use serde::{Deserialize, Serialize};

/// A shared message template with `{{variable}}` placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub content: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateInput {
    pub name: String,
    pub category: Option<String>,
    pub subject: Option<String>,
    pub content: String,
}

impl From<&Template> for TemplateInput {
    fn from(t: &Template) -> Self {
        Self {
            name: t.name.clone(),
            category: t.category.clone(),
            subject: t.subject.clone(),
            content: t.content.clone(),
        }
    }
}

/// One saved revision of a template, newest first in API listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVersion {
    pub version: u32,
    #[serde(default)]
    pub subject: Option<String>,
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub created_by: Option<String>,
}
