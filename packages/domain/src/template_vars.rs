//! # Template variables: `{{name}}` placeholders
//!
//! Templates carry placeholders written as `{{name}}` where `name` is
//! lowercase snake_case (`[a-z][a-z0-9_]*`). Anything else between double
//! braces (uppercase, hyphens, a leading digit, inner whitespace) is plain
//! text and is never extracted or substituted.
//!
//! - [`extract_template_variables`] lists the names in first-seen order.
//! - [`apply_template_variables`] substitutes values and reports the names it
//!   could not resolve.
//! - [`compose_copy_text`] builds the clipboard text for a filled template.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::Template;

// Constant pattern, checked by every test in this module.
static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([a-z][a-z0-9_]*)\}\}").expect("valid variable regex"));

/// Lookup of values by variable name.
pub trait VariableValues {
    fn value(&self, name: &str) -> Option<&str>;
}

impl VariableValues for HashMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl VariableValues for BTreeMap<String, String> {
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl VariableValues for [(String, String)] {
    fn value(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl<T: VariableValues + ?Sized> VariableValues for &T {
    fn value(&self, name: &str) -> Option<&str> {
        (**self).value(name)
    }
}

/// Result of substituting values into a text.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedTemplate {
    pub text: String,
    /// Names left as literal `{{name}}` tokens, first-seen order.
    pub unresolved: Vec<String>,
}

/// A template with values applied to both subject and body.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTemplate {
    pub subject: Option<String>,
    pub body: String,
    pub copy_text: String,
    pub unresolved: Vec<String>,
}

/// Variable names appearing in `subject` then `content`, deduplicated.
pub fn extract_template_variables(subject: &str, content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for text in [subject, content] {
        for caps in VARIABLE.captures_iter(text) {
            let name = &caps[1];
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Replace every token that has a non-blank value. Missing or blank values
/// leave the token intact and are reported in `unresolved`.
pub fn apply_template_variables<V: VariableValues + ?Sized>(text: &str, values: &V) -> AppliedTemplate {
    let mut unresolved: Vec<String> = Vec::new();
    let replaced = VARIABLE.replace_all(text, |caps: &Captures| {
        let name = &caps[1];
        match values.value(name) {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => {
                if !unresolved.iter().any(|n| n == name) {
                    unresolved.push(name.to_string());
                }
                caps[0].to_string()
            }
        }
    });
    AppliedTemplate {
        text: replaced.into_owned(),
        unresolved,
    }
}

/// Clipboard text: a `Subject:` header only when the subject is non-blank.
pub fn compose_copy_text(subject: Option<&str>, body: &str) -> String {
    match subject {
        Some(subject) if !subject.trim().is_empty() => format!("Subject: {subject}\n\n{body}"),
        _ => body.to_string(),
    }
}

/// Fill a whole template.
pub fn render_template<V: VariableValues + ?Sized>(template: &Template, values: &V) -> RenderedTemplate {
    let subject = template
        .subject
        .as_deref()
        .map(|s| apply_template_variables(s, values));
    let body = apply_template_variables(&template.content, values);

    let mut unresolved = subject
        .as_ref()
        .map(|s| s.unresolved.clone())
        .unwrap_or_default();
    for name in body.unresolved {
        if !unresolved.contains(&name) {
            unresolved.push(name);
        }
    }

    let subject = subject.map(|s| s.text);
    let copy_text = compose_copy_text(subject.as_deref(), &body.text);
    RenderedTemplate {
        subject,
        body: body.text,
        copy_text,
        unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_first_seen_order_deduplicated() {
        let names = extract_template_variables(
            "Welcome {{client_name}}",
            "Hi {{client_name}}, {{dog_name}} is ready.",
        );
        assert_eq!(names, vec!["client_name", "dog_name"]);
    }

    #[test]
    fn test_extract_rejects_invalid_names() {
        assert!(extract_template_variables("{{ClientName}}", "{{2x}}").is_empty());
        assert!(extract_template_variables("{{client-name}}", "{{ name }}").is_empty());
    }

    #[test]
    fn test_extract_subject_before_content() {
        let names = extract_template_variables("{{b}}", "{{a}} {{b}} {{c_1}}");
        assert_eq!(names, vec!["b", "a", "c_1"]);
    }

    #[test]
    fn test_apply_substitutes_known_values() {
        let applied = apply_template_variables(
            "Hi {{client_name}}, {{dog_name}} is ready.",
            &values(&[("client_name", "Ana"), ("dog_name", "Rex")]),
        );
        assert_eq!(applied.text, "Hi Ana, Rex is ready.");
        assert!(applied.unresolved.is_empty());
    }

    #[test]
    fn test_apply_leaves_missing_and_blank_tokens() {
        let applied = apply_template_variables(
            "{{a}} {{b}} {{a}} {{c}}",
            &values(&[("b", "   "), ("c", "ok")]),
        );
        assert_eq!(applied.text, "{{a}} {{b}} {{a}} ok");
        assert_eq!(applied.unresolved, vec!["a", "b"]);
    }

    #[test]
    fn test_apply_accepts_pair_slices() {
        let pairs = vec![("name".to_string(), "Sam".to_string())];
        let applied = apply_template_variables("Hello {{name}}", pairs.as_slice());
        assert_eq!(applied.text, "Hello Sam");
    }

    #[test]
    fn test_apply_ignores_invalid_tokens() {
        let applied = apply_template_variables("{{Name}} {{x-y}}", &values(&[]));
        assert_eq!(applied.text, "{{Name}} {{x-y}}");
        assert!(applied.unresolved.is_empty());
    }

    #[test]
    fn test_compose_copy_text() {
        assert_eq!(compose_copy_text(Some("Hello"), "Body"), "Subject: Hello\n\nBody");
        assert_eq!(compose_copy_text(Some("  "), "Body"), "Body");
        assert_eq!(compose_copy_text(None, "Body"), "Body");
    }

    #[test]
    fn test_render_template_merges_unresolved() {
        let template = Template {
            id: "t1".into(),
            name: "Welcome".into(),
            category: None,
            subject: Some("Welcome {{client_name}}".into()),
            content: "Hi {{client_name}}, {{dog_name}} is ready.".into(),
            updated_at: String::new(),
        };
        let rendered = render_template(&template, &values(&[("dog_name", "Rex")]));
        assert_eq!(rendered.subject.as_deref(), Some("Welcome {{client_name}}"));
        assert_eq!(rendered.body, "Hi {{client_name}}, Rex is ready.");
        assert_eq!(rendered.unresolved, vec!["client_name"]);
        assert!(rendered.copy_text.starts_with("Subject: Welcome {{client_name}}\n\n"));
    }
}
