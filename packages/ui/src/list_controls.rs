//! Search box, category filter and sort toggle driving a [`ListQuery`].

use dioxus::prelude::*;
use domain::listing::{ListQuery, SortDirection, SortKey};

use crate::components::Input;

#[component]
pub fn ListControls(
    query: Signal<ListQuery>,
    /// Category choices; the filter is hidden when empty.
    #[props(default)]
    categories: Vec<String>,
    /// Sort keys offered with their labels.
    sort_options: Vec<(SortKey, &'static str)>,
    #[props(default = "Search…".to_string())] placeholder: String,
) -> Element {
    let mut query = query;
    let current = query();
    let choices = sort_options.clone();
    let arrow = match current.direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    };

    rsx! {
        div {
            class: "list-controls",
            Input {
                class: "list-search",
                r#type: "search",
                placeholder: placeholder,
                value: current.search.clone(),
                oninput: move |evt: FormEvent| query.write().search = evt.value(),
            }
            if !categories.is_empty() {
                select {
                    class: "field-select",
                    value: current.category.clone().unwrap_or_default(),
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        query.write().category = if value.is_empty() { None } else { Some(value) };
                    },
                    option { value: "", "All categories" }
                    for category in categories.iter() {
                        option { key: "{category}", value: "{category}", "{category}" }
                    }
                }
            }
            if sort_options.len() > 1 {
                select {
                    class: "field-select",
                    onchange: move |evt: FormEvent| {
                        if let Ok(i) = evt.value().parse::<usize>() {
                            if let Some((key, _)) = choices.get(i) {
                                query.write().sort = *key;
                            }
                        }
                    },
                    for (i, (key, label)) in sort_options.iter().enumerate() {
                        option {
                            key: "{i}",
                            value: "{i}",
                            selected: *key == current.sort,
                            "{label}"
                        }
                    }
                }
            }
            button {
                class: "btn btn--ghost",
                title: "Toggle sort direction",
                onclick: move |_| {
                    let next = query.peek().direction.toggled();
                    query.write().direction = next;
                },
                "{arrow}"
            }
        }
    }
}
