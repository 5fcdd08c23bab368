//! Form Creation Wizard Page
//!
//! Two-screen flow for creating a managed form: pick a template, fill in
//! the details, insert one row into the table store, then hand off to the
//! editor page for the new record. All transition and payload logic lives
//! in [`crate::wizard`]; this module is the rendering and the submit
//! boundary.

use dioxus::prelude::*;
use formdeck_core::{builtin_templates, slugify};

use crate::components::{AiBuilderCard, TemplateCard, TextArea, TextInput};
use crate::state::{APP_STATE, Page, StatusLevel};
use crate::wizard::{WizardState, WizardStep};

// ============================================================================
// Wizard Page
// ============================================================================

/// The form creation wizard
#[component]
pub fn FormWizardPage() -> Element {
    let wizard = use_signal(WizardState::new);
    let step = wizard.read().step;

    rsx! {
        div {
            class: "page wizard-page",

            // Page Header
            div {
                class: "page-header",

                div {
                    h1 { class: "page-title", "✨ Create a form" }
                    p { class: "page-subtitle", "{step.title()}" }
                }

                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        APP_STATE.write().ui.navigate(Page::Forms);
                    },
                    "Cancel"
                }
            }

            // The two screens are mutually exclusive; the match is exhaustive
            match step {
                WizardStep::TemplatePick => rsx! { TemplateStep { wizard } },
                WizardStep::Details => rsx! { DetailsStep { wizard } },
            }
        }
    }
}

// ============================================================================
// Step 1: Template Selection
// ============================================================================

#[component]
fn TemplateStep(wizard: Signal<WizardState>) -> Element {
    let entitled = APP_STATE.read().session.entitlements.ai_builder;
    let selected_id = wizard.read().template_id();

    rsx! {
        div {
            class: "wizard-step",

            p {
                class: "wizard-hint",
                "Start from a template or a blank canvas. Picking one takes you straight to the details."
            }

            div {
                class: "template-grid",

                for template in builtin_templates() {
                    TemplateCard {
                        key: "{template.id}",
                        template,
                        selected: selected_id == Some(template.id),
                        onclick: move |_| {
                            wizard.write().select_template(template);
                        },
                    }
                }

                // Entitlement-gated placeholder; never part of the selection
                AiBuilderCard { entitled }
            }
        }
    }
}

// ============================================================================
// Step 2: Details & Create
// ============================================================================

#[component]
fn DetailsStep(wizard: Signal<WizardState>) -> Element {
    let state = APP_STATE.read();
    let has_project = state.has_project();
    drop(state);

    // Live preview of what a blank slug would be derived to
    let slug_placeholder = use_memo(move || {
        let name = wizard.read().name.clone();
        if name.trim().is_empty() {
            "derived from the name".to_string()
        } else {
            slugify(&name)
        }
    });

    // Shared submit logic - used by both the button click and Enter key.
    // Preconditions (project present, non-empty name) make this a no-op
    // rather than an error; the button is disabled in those states anyway.
    let mut do_create = move |_: ()| {
        let (client, project) = {
            let state = APP_STATE.read();
            (state.session.client.clone(), state.session.project.clone())
        };
        let (Some(client), Some(project)) = (client, project) else {
            return;
        };
        let Some(draft) = wizard.read().draft(project.id) else {
            return;
        };
        if !wizard.write().begin_save() {
            return;
        }

        spawn(async move {
            match client.insert_form(&draft).await {
                Ok(record) => {
                    tracing::info!(form_id = %record.id, "created form '{}'", record.name);
                    let mut state = APP_STATE.write();
                    state.remember_form(record.clone());
                    state.ui.set_status(
                        format!("Created form '{}'", record.name),
                        StatusLevel::Success,
                    );
                    state.ui.navigate(Page::FormEditor(record.id));
                }
                Err(e) => {
                    // Stay on this screen with everything the user typed
                    // intact; releasing the guard re-enables the button.
                    tracing::error!("failed to create form: {e}");
                    APP_STATE.write().ui.set_status(
                        format!("Could not create form: {e}"),
                        StatusLevel::Error,
                    );
                    wizard.write().finish_save();
                }
            }
        });
    };

    let form = wizard.read().clone();
    let saving = form.is_saving;

    rsx! {
        div {
            class: "wizard-step",

            // Back to the template step; selection and entered text survive
            button {
                class: "btn btn-ghost wizard-back",
                disabled: saving,
                onclick: move |_| {
                    wizard.write().back();
                },
                "← Templates"
            }

            // Selected template summary
            if let Some(template) = form.selected_template {
                div {
                    class: "template-summary",
                    span { class: "template-summary-icon", "{template.icon}" }
                    div {
                        span { class: "template-summary-name", "{template.name}" }
                        if template.fields.is_empty() {
                            span { class: "template-summary-fields", "starts empty" }
                        } else {
                            span {
                                class: "template-summary-fields",
                                "starts with {template.fields.len()} fields"
                            }
                        }
                    }
                }
            }

            form {
                class: "wizard-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    do_create(());
                },

                TextInput {
                    value: form.name.clone(),
                    label: "Name",
                    placeholder: "e.g. Newsletter Signup",
                    required: true,
                    autofocus: true,
                    disabled: saving,
                    on_change: move |value| wizard.write().name = value,
                }

                TextInput {
                    value: form.slug.clone(),
                    label: "Slug",
                    placeholder: slug_placeholder.read().clone(),
                    help_text: "Lowercase letters, digits and hyphens. Leave blank to derive it from the name.",
                    disabled: saving,
                    on_change: move |value| wizard.write().slug = value,
                }

                TextArea {
                    value: form.description.clone(),
                    label: "Description",
                    placeholder: "What is this form for?",
                    rows: 3,
                    disabled: saving,
                    on_change: move |value| wizard.write().description = value,
                }

                if !has_project {
                    p {
                        class: "error-text",
                        "No active project - sign in and select a project to create forms."
                    }
                }

                div {
                    class: "wizard-actions",

                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: saving,
                        onclick: move |_| {
                            APP_STATE.write().ui.navigate(Page::Forms);
                        },
                        "Cancel"
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving || !has_project || !form.can_submit(),

                        if saving {
                            "⏳ Creating…"
                        } else {
                            "Create Form"
                        }
                    }
                }
            }
        }
    }
}
