use std::collections::BTreeMap;

use dioxus::prelude::*;
use domain::listing::{self, ListQuery, SortKey};
use domain::template_vars::{compose_copy_text, extract_template_variables, render_template};
use domain::{Template, TemplateVersion};

use crate::components::{Button, ButtonVariant, EmptyState, InlineError, Input, Label, Spinner};
use crate::context::use_api;
use crate::diff_view::DiffView;
use crate::js::copy_to_clipboard;
use crate::list_controls::ListControls;
use crate::paths;
use crate::toast::use_toasts;

#[component]
pub fn TemplatesView() -> Element {
    let client = use_api();
    let query = use_signal(ListQuery::default);
    let mut templates = use_resource(move || {
        let client = client.clone();
        async move { client.list_templates().await }
    });

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Templates" }
            match &*templates.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError {
                        message: format!("Could not load templates: {e}"),
                        on_retry: move |_| templates.restart(),
                    }
                },
                Some(Ok(all)) => {
                    let shown = listing::apply(all, &query());
                    rsx! {
                        ListControls {
                            query,
                            categories: listing::categories(all),
                            sort_options: vec![(SortKey::Title, "Name"), (SortKey::Updated, "Last updated")],
                            placeholder: "Search templates…",
                        }
                        if shown.is_empty() {
                            EmptyState { title: "No templates", message: "Nothing matches the current filter." }
                        }
                        ul {
                            class: "page-list",
                            for template in shown {
                                li {
                                    key: "{template.id}",
                                    Link { to: paths::template(&template.id), "{template.name}" }
                                    if let Some(category) = &template.category {
                                        span { class: "badge", "{category}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TemplateDetailView(id: String) -> Element {
    let client = use_api();
    let mut template = use_resource(use_reactive!(|id| {
        let client = client.clone();
        async move { client.template(&id).await }
    }));

    rsx! {
        div {
            class: "view-page",
            Link { class: "view-back", to: paths::TEMPLATES, "← All templates" }
            match &*template.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) if e.is_not_found() => rsx! {
                    EmptyState { title: "Template not found", message: "It may have been deleted." }
                },
                Some(Err(e)) => rsx! {
                    InlineError {
                        message: format!("Could not load the template: {e}"),
                        on_retry: move |_| template.restart(),
                    }
                },
                Some(Ok(t)) => rsx! {
                    TemplateFiller { key: "{t.id}", template: t.clone() }
                    TemplateHistory { key: "{t.id}-history", template: t.clone() }
                },
            }
        }
    }
}

/// Variable inputs, live preview and copy.
#[component]
fn TemplateFiller(template: Template) -> Element {
    let toasts = use_toasts();
    let mut values = use_signal(BTreeMap::<String, String>::new);
    let variables = extract_template_variables(template.subject.as_deref().unwrap_or(""), &template.content);
    let rendered = render_template(&template, &values());
    let copy_text = rendered.copy_text.clone();

    rsx! {
        h1 { class: "view-title", "{template.name}" }
        if !variables.is_empty() {
            div {
                class: "template-variables",
                h2 { class: "view-section-title", "Fill in" }
                for name in variables {
                    div {
                        key: "{name}",
                        class: "field",
                        Label { html_for: "var-{name}", "{name}" }
                        Input {
                            id: "var-{name}",
                            value: values.read().get(&name).cloned().unwrap_or_default(),
                            oninput: {
                                let name = name.clone();
                                move |evt: FormEvent| {
                                    values.write().insert(name.clone(), evt.value());
                                }
                            },
                        }
                    }
                }
            }
        }
        if !rendered.unresolved.is_empty() {
            div {
                class: "template-unresolved",
                role: "status",
                "Still missing: "
                for name in rendered.unresolved.iter() {
                    code { key: "{name}", "{{{{{name}}}}}" }
                    " "
                }
            }
        }
        div {
            class: "template-preview",
            if let Some(subject) = &rendered.subject {
                p { class: "template-subject", strong { "Subject: " } "{subject}" }
            }
            pre { class: "template-body", "{rendered.body}" }
        }
        Button {
            onclick: move |_| {
                let text = copy_text.clone();
                spawn(async move {
                    if copy_to_clipboard(&text).await {
                        toasts.success("Copied to clipboard");
                    } else {
                        toasts.error("Clipboard is not available");
                    }
                });
            },
            "Copy"
        }
    }
}

/// Earlier versions, loaded on request, diffed against the current text.
#[component]
fn TemplateHistory(template: Template) -> Element {
    let client = use_api();
    let mut open = use_signal(|| false);
    let mut selected = use_signal(|| Option::<TemplateVersion>::None);
    let id = template.id.clone();
    let versions = use_resource(move || {
        let client = client.clone();
        let id = id.clone();
        async move {
            if !open() {
                return Ok(Vec::new());
            }
            client.template_versions(&id).await
        }
    });
    let current = compose_copy_text(template.subject.as_deref(), &template.content);

    rsx! {
        section {
            class: "history",
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| open.toggle(),
                if open() { "Hide history" } else { "Version history" }
            }
            if open() {
                match &*versions.read() {
                    None => rsx! { Spinner { label: "Loading versions…" } },
                    Some(Err(e)) => rsx! { InlineError { message: format!("Could not load versions: {e}") } },
                    Some(Ok(list)) if list.is_empty() => rsx! { p { class: "view-muted", "No earlier versions." } },
                    Some(Ok(list)) => rsx! {
                        ul {
                            class: "history-list",
                            for v in list.iter().cloned() {
                                li {
                                    key: "{v.version}",
                                    button {
                                        class: "history-item",
                                        onclick: {
                                            let v = v.clone();
                                            move |_| selected.set(Some(v.clone()))
                                        },
                                        "v{v.version} · {v.created_at}"
                                        if let Some(by) = &v.created_by { " · {by}" }
                                    }
                                }
                            }
                        }
                    },
                }
                if let Some(v) = selected() {
                    DiffView {
                        old: compose_copy_text(v.subject.as_deref(), &v.content),
                        new: current.clone(),
                    }
                }
            }
        }
    }
}
