use serde::{Deserialize, Serialize};

/// A directory entry on the links page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub position: i32,
}

/// Body for creating or updating a link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkInput {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub position: i32,
}

impl From<&Link> for LinkInput {
    fn from(link: &Link) -> Self {
        Self {
            title: link.title.clone(),
            url: link.url.clone(),
            description: link.description.clone(),
            category: link.category.clone(),
            position: link.position,
        }
    }
}
