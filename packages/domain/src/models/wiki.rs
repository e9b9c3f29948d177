use serde::{Deserialize, Serialize};

/// Wiki page as listed in the index (no body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiPageSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Full wiki page with markdown content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiPage {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WikiPageInput {
    pub slug: String,
    pub title: String,
    pub content: String,
}

impl From<&WikiPage> for WikiPageInput {
    fn from(page: &WikiPage) -> Self {
        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            content: page.content.clone(),
        }
    }
}

/// Response of the image upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub url: String,
}

/// Derive a URL slug from a page title: lowercase ASCII alphanumerics joined by `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Onboarding Guide"), "onboarding-guide");
        assert_eq!(slugify("  Q3 -- Plans!  "), "q3-plans");
        assert_eq!(slugify("***"), "");
    }
}
