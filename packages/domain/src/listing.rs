//! Search, category filter and sort over client-side lists.

use std::cmp::Ordering;

use crate::models::{AdminUser, BrandRule, Link, Template, WikiPageSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Updated,
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Value compared when sorting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Text(String),
    Number(i64),
}

/// Something that can be searched and sorted in a list view.
pub trait Listable: Clone {
    /// Lowercase haystack matched against search terms.
    fn search_text(&self) -> String;
    fn sort_value(&self, key: SortKey) -> SortValue;
    fn category(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListQuery {
    pub search: String,
    pub sort: SortKey,
    pub direction: SortDirection,
    /// Category to keep, compared trimmed; `None` keeps everything.
    pub category: Option<String>,
}

impl ListQuery {
    pub fn sorted_by(sort: SortKey, direction: SortDirection) -> Self {
        Self {
            sort,
            direction,
            ..Self::default()
        }
    }

    fn terms(&self) -> Vec<String> {
        self.search
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }
}

/// Filter by every search term and the category, then stable-sort.
pub fn apply<T: Listable>(items: &[T], query: &ListQuery) -> Vec<T> {
    let terms = query.terms();
    let mut out: Vec<T> = items
        .iter()
        .filter(|item| {
            if terms.is_empty() {
                return true;
            }
            let haystack = item.search_text();
            terms.iter().all(|term| haystack.contains(term.as_str()))
        })
        .filter(|item| match query.category.as_deref() {
            Some(wanted) => item.category().map(str::trim) == Some(wanted.trim()),
            None => true,
        })
        .cloned()
        .collect();

    out.sort_by(|a, b| {
        let ord = a.sort_value(query.sort).cmp(&b.sort_value(query.sort));
        match query.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    out
}

/// Distinct non-blank categories, sorted case-insensitively.
pub fn categories<T: Listable>(items: &[T]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if let Some(category) = item.category() {
            let category = category.trim();
            if !category.is_empty() && !out.iter().any(|c| c == category) {
                out.push(category.to_string());
            }
        }
    }
    out.sort_by(|a, b| compare_ignore_case(a, b));
    out
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn join_lower(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|p| p.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn text(s: &str) -> SortValue {
    SortValue::Text(s.to_lowercase())
}

impl Listable for Link {
    fn search_text(&self) -> String {
        join_lower(&[
            Some(self.title.as_str()),
            Some(self.url.as_str()),
            self.description.as_deref(),
            self.category.as_deref(),
        ])
    }

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Position => SortValue::Number(self.position as i64),
            SortKey::Title | SortKey::Updated => text(&self.title),
        }
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Listable for WikiPageSummary {
    fn search_text(&self) -> String {
        join_lower(&[Some(self.title.as_str()), Some(self.slug.as_str())])
    }

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Updated => SortValue::Text(self.updated_at.clone()),
            SortKey::Title | SortKey::Position => text(&self.title),
        }
    }
}

impl Listable for Template {
    fn search_text(&self) -> String {
        join_lower(&[
            Some(self.name.as_str()),
            self.category.as_deref(),
            self.subject.as_deref(),
            Some(self.content.as_str()),
        ])
    }

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Updated => SortValue::Text(self.updated_at.clone()),
            SortKey::Title | SortKey::Position => text(&self.name),
        }
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Listable for AdminUser {
    fn search_text(&self) -> String {
        join_lower(&[Some(self.email.as_str()), self.name.as_deref()])
    }

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            SortKey::Updated => SortValue::Text(self.last_login_at.clone().unwrap_or_default()),
            SortKey::Title | SortKey::Position => text(&self.email),
        }
    }
}

impl Listable for BrandRule {
    fn search_text(&self) -> String {
        join_lower(&[Some(self.title.as_str()), Some(self.rule.as_str()), self.example.as_deref()])
    }

    fn sort_value(&self, _key: SortKey) -> SortValue {
        text(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str, category: Option<&str>, position: i32) -> Link {
        Link {
            id: title.to_lowercase(),
            title: title.to_string(),
            url: format!("https://{}.example.com", title.to_lowercase()),
            description: None,
            category: category.map(str::to_string),
            position,
        }
    }

    fn sample() -> Vec<Link> {
        vec![
            link("Payroll", Some("HR"), 2),
            link("Calendar", Some("Tools"), 1),
            link("benefits", Some("HR"), 3),
            link("Status", None, 0),
        ]
    }

    #[test]
    fn test_sort_by_title_case_insensitive() {
        let out = apply(&sample(), &ListQuery::default());
        let titles: Vec<_> = out.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["benefits", "Calendar", "Payroll", "Status"]);
    }

    #[test]
    fn test_sort_by_position_descending() {
        let query = ListQuery::sorted_by(SortKey::Position, SortDirection::Descending);
        let out = apply(&sample(), &query);
        assert_eq!(out[0].title, "benefits");
        assert_eq!(out[3].title, "Status");
    }

    #[test]
    fn test_search_requires_every_term() {
        let query = ListQuery {
            search: "  PAY  example ".to_string(),
            ..ListQuery::default()
        };
        let out = apply(&sample(), &query);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Payroll");
    }

    #[test]
    fn test_category_filter() {
        let query = ListQuery {
            category: Some("HR".to_string()),
            ..ListQuery::default()
        };
        let out = apply(&sample(), &query);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|l| l.category.as_deref() == Some("HR")));
    }

    #[test]
    fn test_category_filter_ignores_padding() {
        let mut items = sample();
        items.push(link("Holidays", Some(" HR "), 4));
        assert_eq!(categories(&items), vec!["HR", "Tools"]);

        let query = ListQuery {
            category: Some("HR".to_string()),
            ..ListQuery::default()
        };
        let titles: Vec<_> = apply(&items, &query).into_iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["benefits", "Holidays", "Payroll"]);
    }

    #[test]
    fn test_categories_distinct_sorted() {
        assert_eq!(categories(&sample()), vec!["HR", "Tools"]);
    }

    #[test]
    fn test_toggle_direction() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
    }
}
