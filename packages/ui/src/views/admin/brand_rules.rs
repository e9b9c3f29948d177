use dioxus::prelude::*;
use domain::listing::{self, ListQuery};
use domain::{BrandRule, BrandRuleInput};

use super::non_blank;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, EmptyState, InlineError, Input, Label, ModalOverlay, Spinner,
    Textarea,
};
use crate::context::use_api;
use crate::list_controls::ListControls;
use crate::toast::use_toasts;

#[derive(Clone, PartialEq)]
struct Editing {
    id: Option<String>,
    input: BrandRuleInput,
}

/// Style rules the brand-voice assistant follows.
#[component]
pub fn AdminBrandRulesView() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let query = use_signal(ListQuery::default);
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut deleting = use_signal(|| Option::<BrandRule>::None);

    let list_client = client.clone();
    let mut rules = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_brand_rules().await }
    });

    let toggle_client = client.clone();
    let toggle = move |rule: BrandRule| {
        let client = toggle_client.clone();
        spawn(async move {
            let input = BrandRuleInput {
                enabled: !rule.enabled,
                ..BrandRuleInput::from(&rule)
            };
            match client.update_brand_rule(&rule.id, &input).await {
                Ok(_) => rules.restart(),
                Err(e) => toasts.error(format!("Could not update rule: {e}")),
            }
        });
    };

    let delete = move |rule: BrandRule| {
        let client = client.clone();
        spawn(async move {
            match client.delete_brand_rule(&rule.id).await {
                Ok(()) => {
                    toasts.success(format!("Deleted {}", rule.title));
                    rules.restart();
                }
                Err(e) => toasts.error(format!("Could not delete rule: {e}")),
            }
        });
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Brand rules" }
                Button {
                    onclick: move |_| editing.set(Some(Editing { id: None, input: BrandRuleInput::default() })),
                    "Add rule"
                }
            }
            match &*rules.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError { message: format!("Could not load rules: {e}"), on_retry: move |_| rules.restart() }
                },
                Some(Ok(all)) if all.is_empty() => rsx! {
                    EmptyState { title: "No rules yet", message: "Rules describe tone, wording and things to avoid." }
                },
                Some(Ok(all)) => {
                    let shown = listing::apply(all, &query());
                    rsx! {
                        ListControls { query, sort_options: Vec::new(), placeholder: "Search rules…" }
                        ul {
                            class: "rule-list",
                            for rule in shown {
                                li {
                                    key: "{rule.id}",
                                    class: if rule.enabled { "rule" } else { "rule rule--disabled" },
                                    div {
                                        class: "rule-text",
                                        h3 { "{rule.title}" }
                                        p { "{rule.rule}" }
                                        if let Some(example) = &rule.example {
                                            p { class: "view-muted", "e.g. {example}" }
                                        }
                                    }
                                    div {
                                        class: "admin-table-actions",
                                        label {
                                            class: "checkbox",
                                            input {
                                                r#type: "checkbox",
                                                checked: rule.enabled,
                                                onchange: {
                                                    let rule = rule.clone();
                                                    let toggle = toggle.clone();
                                                    move |_| toggle(rule.clone())
                                                },
                                            }
                                            " Enabled"
                                        }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let rule = rule.clone();
                                                move |_| editing.set(Some(Editing {
                                                    id: Some(rule.id.clone()),
                                                    input: BrandRuleInput::from(&rule),
                                                }))
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let rule = rule.clone();
                                                move |_| deleting.set(Some(rule.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(edit) = editing() {
            BrandRuleForm {
                id: edit.id,
                initial: edit.input,
                on_close: move |saved: bool| {
                    editing.set(None);
                    if saved {
                        rules.restart();
                    }
                },
            }
        }
        if let Some(rule) = deleting() {
            ConfirmDialog {
                title: "Delete rule?",
                message: format!("\u{201c}{}\u{201d} will no longer guide rewrites.", rule.title),
                on_cancel: move |_| deleting.set(None),
                on_confirm: move |_| {
                    deleting.set(None);
                    delete(rule.clone());
                },
            }
        }
    }
}

#[component]
fn BrandRuleForm(
    #[props(!optional)] id: Option<String>,
    initial: BrandRuleInput,
    on_close: EventHandler<bool>,
) -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let mut title = use_signal(|| initial.title.clone());
    let mut rule = use_signal(|| initial.rule.clone());
    let mut example = use_signal(|| initial.example.clone().unwrap_or_default());
    let mut enabled = use_signal(|| initial.enabled);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let is_new = id.is_none();

    let save = move |_| {
        let client = client.clone();
        let id = id.clone();
        async move {
            if title().trim().is_empty() || rule().trim().is_empty() {
                error.set(Some("Title and rule are required.".to_string()));
                return;
            }
            let input = BrandRuleInput {
                title: title().trim().to_string(),
                rule: rule().trim().to_string(),
                example: non_blank(&example()),
                enabled: enabled(),
            };
            saving.set(true);
            let result = match &id {
                Some(id) => client.update_brand_rule(id, &input).await,
                None => client.create_brand_rule(&input).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    toasts.success(format!("Saved {}", saved.title));
                    on_close.call(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(false),
            div {
                class: "modal-body",
                h2 { class: "modal-title", if is_new { "Add rule" } else { "Edit rule" } }
                if let Some(message) = error() {
                    InlineError { message }
                }
                div { class: "field",
                    Label { html_for: "rule-title", "Title" }
                    Input { id: "rule-title", value: title(), oninput: move |e: FormEvent| title.set(e.value()) }
                }
                div { class: "field",
                    Label { html_for: "rule-text", "Rule" }
                    Textarea { id: "rule-text", rows: 4, value: rule(), oninput: move |e: FormEvent| rule.set(e.value()) }
                }
                div { class: "field",
                    Label { html_for: "rule-example", "Example (optional)" }
                    Input { id: "rule-example", value: example(), oninput: move |e: FormEvent| example.set(e.value()) }
                }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: enabled(),
                        onchange: move |e: FormEvent| enabled.set(e.checked()),
                    }
                    " Enabled"
                }
                div {
                    class: "modal-actions",
                    Button { variant: ButtonVariant::Secondary, onclick: move |_| on_close.call(false), "Cancel" }
                    Button { disabled: saving(), onclick: save, if saving() { "Saving…" } else { "Save" } }
                }
            }
        }
    }
}
