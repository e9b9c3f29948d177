//! Admin screens. All of them sit behind `RequireAdmin`.

mod brand_rules;
mod guests;
mod links;
mod templates;
mod users;
mod wiki;

pub use brand_rules::AdminBrandRulesView;
pub use guests::AdminGuestsView;
pub use links::AdminLinksView;
pub use templates::AdminTemplatesView;
pub use users::AdminUsersView;
pub use wiki::{AdminWikiView, WikiEditorView};

use dioxus::prelude::*;
use domain::AppKey;

/// `None` for blank form input.
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Checkbox per app.
#[component]
pub(crate) fn AppChecklist(selected: Vec<AppKey>, on_change: EventHandler<Vec<AppKey>>) -> Element {
    rsx! {
        div {
            class: "app-checklist",
            for app in AppKey::all() {
                label {
                    key: "{app.as_str()}",
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: selected.contains(&app),
                        onchange: {
                            let selected = selected.clone();
                            move |evt: FormEvent| {
                                let mut next: Vec<AppKey> = selected.iter().copied().filter(|a| *a != app).collect();
                                if evt.checked() {
                                    next.push(app);
                                }
                                next.sort_by_key(|a| AppKey::all().iter().position(|x| x == a));
                                on_change.call(next);
                            }
                        },
                    }
                    " {app.label()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  "), None);
        assert_eq!(non_blank(" HR "), Some("HR".to_string()));
    }
}
