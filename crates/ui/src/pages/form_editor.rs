//! Form Editor Landing Page
//!
//! Where the creation wizard hands off to. Field editing, activation, and
//! publishing are separate editor surfaces; this page is the read-only
//! overview of one form, addressed by its record id.

use dioxus::prelude::*;
use formdeck_core::{FormId, FormRecord, template_by_id};

use crate::state::{APP_STATE, Page};

/// Editor landing view for one form
#[component]
pub fn FormEditorPage(form_id: FormId) -> Element {
    // Fresh creations are already cached; deep links fetch the row
    let mut record = use_signal(|| APP_STATE.read().form(form_id).cloned());
    let mut load_error = use_signal(|| None::<String>);

    use_effect(move || {
        if record.read().is_some() {
            return;
        }
        spawn(async move {
            let client = APP_STATE.read().session.client.clone();
            let Some(client) = client else {
                load_error.set(Some("Not connected to a table store".to_string()));
                return;
            };
            match client.fetch_form(form_id).await {
                Ok(form) => {
                    APP_STATE.write().remember_form(form.clone());
                    record.set(Some(form));
                }
                Err(e) => {
                    tracing::error!("failed to load form {form_id}: {e}");
                    load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    rsx! {
        div {
            class: "page",

            div {
                class: "page-header",

                div {
                    h1 { class: "page-title", "✏️ Form Editor" }
                }

                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        APP_STATE.write().ui.navigate(Page::Forms);
                    },
                    "← All forms"
                }
            }

            if let Some(form) = record.read().as_ref() {
                FormOverview { form: form.clone() }
            } else if let Some(error) = load_error.read().as_ref() {
                div {
                    class: "empty-state",
                    p { class: "empty-state-title", "Could not load this form" }
                    p { class: "empty-state-hint", "{error}" }
                }
            } else {
                div {
                    class: "empty-state",
                    p { class: "empty-state-hint", "Loading form…" }
                }
            }
        }
    }
}

/// Read-only summary card for the loaded record
#[component]
fn FormOverview(form: FormRecord) -> Element {
    let template = template_by_id(&form.form_type);
    let type_label = template.map_or(form.form_type.as_str(), |t| t.name);
    let badge_class = if form.is_active {
        "badge badge-active"
    } else {
        "badge badge-disabled"
    };

    rsx! {
        div {
            class: "editor-overview",

            div {
                class: "editor-meta",

                h2 { class: "editor-form-name", "{form.name}" }
                span { class: "{badge_class}", "{form.status_label()}" }

                div {
                    class: "meta-grid",
                    MetaRow { label: "Slug", value: format!("/{}", form.slug) }
                    MetaRow { label: "Type", value: type_label.to_string() }
                    MetaRow { label: "Version", value: format!("v{}", form.version) }
                    if let Some(description) = &form.description {
                        MetaRow { label: "Description", value: description.clone() }
                    }
                }
            }

            div {
                class: "editor-fields",

                h3 { class: "editor-section-title", "Fields" }

                if let Some(template) = template.filter(|t| !t.fields.is_empty()) {
                    p {
                        class: "help-text",
                        "Starter fields from the {template.name} template:"
                    }
                    div {
                        class: "field-chips",
                        for field in template.fields.iter() {
                            span {
                                key: "{field}",
                                class: "field-chip",
                                "{field}"
                            }
                        }
                    }
                } else {
                    p { class: "help-text", "This form has no fields yet." }
                }

                p {
                    class: "help-text",
                    "New forms stay disabled until published from the editor."
                }
            }
        }
    }
}

#[component]
fn MetaRow(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "meta-row",
            span { class: "meta-label", "{label}" }
            span { class: "meta-value", "{value}" }
        }
    }
}
