use dioxus::prelude::*;
use domain::diff::{diff_stats, line_diff, DiffLine};

/// Line diff from `old` to `new` with added/removed counts.
#[component]
pub fn DiffView(old: String, new: String) -> Element {
    let lines = line_diff(&old, &new);
    let stats = diff_stats(&lines);

    rsx! {
        div {
            class: "diff-view",
            div {
                class: "diff-stats",
                span { class: "diff-stat diff-stat--added", "+{stats.added}" }
                span { class: "diff-stat diff-stat--removed", "-{stats.removed}" }
            }
            if stats.added == 0 && stats.removed == 0 {
                p { class: "view-muted", "No changes." }
            } else {
                pre {
                    class: "diff-lines",
                    for (i, line) in lines.into_iter().enumerate() {
                        match line {
                            DiffLine::Same(text) => rsx! {
                                div { key: "{i}", class: "diff-line", "  {text}" }
                            },
                            DiffLine::Added(text) => rsx! {
                                div { key: "{i}", class: "diff-line diff-line--added", "+ {text}" }
                            },
                            DiffLine::Removed(text) => rsx! {
                                div { key: "{i}", class: "diff-line diff-line--removed", "- {text}" }
                            },
                        }
                    }
                }
            }
        }
    }
}
