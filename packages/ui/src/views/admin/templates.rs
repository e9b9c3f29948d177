use dioxus::prelude::*;
use domain::listing::{self, ListQuery, SortKey};
use domain::template_vars::extract_template_variables;
use domain::{Template, TemplateInput};

use super::non_blank;
use crate::components::{
    Button, ButtonVariant, ConfirmDialog, InlineError, Input, Label, ModalOverlay, Spinner, Textarea,
};
use crate::context::use_api;
use crate::list_controls::ListControls;
use crate::paths;
use crate::toast::use_toasts;

#[derive(Clone, PartialEq)]
struct Editing {
    id: Option<String>,
    input: TemplateInput,
}

#[component]
pub fn AdminTemplatesView() -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let query = use_signal(ListQuery::default);
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut deleting = use_signal(|| Option::<Template>::None);

    let list_client = client.clone();
    let mut templates = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_templates().await }
    });

    let delete = move |template: Template| {
        let client = client.clone();
        spawn(async move {
            match client.delete_template(&template.id).await {
                Ok(()) => {
                    toasts.success(format!("Deleted {}", template.name));
                    templates.restart();
                }
                Err(e) => toasts.error(format!("Could not delete template: {e}")),
            }
        });
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Manage templates" }
                Button {
                    onclick: move |_| editing.set(Some(Editing { id: None, input: TemplateInput::default() })),
                    "New template"
                }
            }
            match &*templates.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    InlineError { message: format!("Could not load templates: {e}"), on_retry: move |_| templates.restart() }
                },
                Some(Ok(all)) => {
                    let shown = listing::apply(all, &query());
                    rsx! {
                        ListControls {
                            query,
                            categories: listing::categories(all),
                            sort_options: vec![(SortKey::Title, "Name"), (SortKey::Updated, "Last updated")],
                        }
                        table {
                            class: "admin-table",
                            thead {
                                tr { th { "Name" } th { "Category" } th { "Updated" } th {} }
                            }
                            tbody {
                                for template in shown {
                                    tr {
                                        key: "{template.id}",
                                        td { Link { to: paths::template(&template.id), "{template.name}" } }
                                        td { {template.category.clone().unwrap_or_default()} }
                                        td { "{template.updated_at}" }
                                        td {
                                            class: "admin-table-actions",
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: {
                                                    let template = template.clone();
                                                    move |_| editing.set(Some(Editing {
                                                        id: Some(template.id.clone()),
                                                        input: TemplateInput::from(&template),
                                                    }))
                                                },
                                                "Edit"
                                            }
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: {
                                                    let template = template.clone();
                                                    move |_| deleting.set(Some(template.clone()))
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
        }
        if let Some(edit) = editing() {
            TemplateForm {
                id: edit.id,
                initial: edit.input,
                on_close: move |saved: bool| {
                    editing.set(None);
                    if saved {
                        templates.restart();
                    }
                },
            }
        }
        if let Some(template) = deleting() {
            ConfirmDialog {
                title: "Delete template?",
                message: format!("{} and its version history will be removed.", template.name),
                on_cancel: move |_| deleting.set(None),
                on_confirm: move |_| {
                    deleting.set(None);
                    delete(template.clone());
                },
            }
        }
    }
}

#[component]
fn TemplateForm(
    #[props(!optional)] id: Option<String>,
    initial: TemplateInput,
    on_close: EventHandler<bool>,
) -> Element {
    let client = use_api();
    let toasts = use_toasts();
    let mut name = use_signal(|| initial.name.clone());
    let mut category = use_signal(|| initial.category.clone().unwrap_or_default());
    let mut subject = use_signal(|| initial.subject.clone().unwrap_or_default());
    let mut content = use_signal(|| initial.content.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let is_new = id.is_none();

    let variables = extract_template_variables(&subject(), &content()).join(", ");

    let save = move |_| {
        let client = client.clone();
        let id = id.clone();
        async move {
            if name().trim().is_empty() || content().trim().is_empty() {
                error.set(Some("Name and content are required.".to_string()));
                return;
            }
            let input = TemplateInput {
                name: name().trim().to_string(),
                category: non_blank(&category()),
                subject: non_blank(&subject()),
                content: content(),
            };
            saving.set(true);
            let result = match &id {
                Some(id) => client.update_template(id, &input).await,
                None => client.create_template(&input).await,
            };
            saving.set(false);
            match result {
                Ok(template) => {
                    toasts.success(format!("Saved {}", template.name));
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
                class: "modal-body modal-body--wide",
                h2 { class: "modal-title", if is_new { "New template" } else { "Edit template" } }
                if let Some(message) = error() {
                    InlineError { message }
                }
                div { class: "field",
                    Label { html_for: "tpl-name", "Name" }
                    Input { id: "tpl-name", value: name(), oninput: move |e: FormEvent| name.set(e.value()) }
                }
                div { class: "field",
                    Label { html_for: "tpl-category", "Category" }
                    Input { id: "tpl-category", value: category(), oninput: move |e: FormEvent| category.set(e.value()) }
                }
                div { class: "field",
                    Label { html_for: "tpl-subject", "Subject (optional)" }
                    Input { id: "tpl-subject", value: subject(), oninput: move |e: FormEvent| subject.set(e.value()) }
                }
                div { class: "field",
                    Label { html_for: "tpl-content", "Content" }
                    Textarea {
                        id: "tpl-content",
                        rows: 12,
                        value: content(),
                        oninput: move |e: FormEvent| content.set(e.value()),
                    }
                    p {
                        class: "view-muted",
                        if variables.is_empty() {
                            "Use {{{{name}}}} for values filled in when the template is used."
                        } else {
                            "Variables: {variables}"
                        }
                    }
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
