//! Forms List Page
//!
//! The landing page: every form in the active project, newest first, with a
//! shortcut into the creation wizard. Rows navigate to the editor page for
//! that form.

use dioxus::prelude::*;
use formdeck_core::template_by_id;

use crate::state::{APP_STATE, Page, StatusLevel};

// ============================================================================
// Data Loading
// ============================================================================

/// Reload the forms cache for the active project.
///
/// Silently does nothing while disconnected or before a project context
/// arrives; failures surface in the status bar and the stale cache stays.
pub(crate) async fn refresh_forms() {
    let (client, project) = {
        let state = APP_STATE.read();
        (state.session.client.clone(), state.session.project.clone())
    };
    let (Some(client), Some(project)) = (client, project) else {
        return;
    };

    match client.list_forms(project.id).await {
        Ok(forms) => {
            tracing::debug!(count = forms.len(), "loaded forms");
            APP_STATE.write().set_forms(forms);
        }
        Err(e) => {
            tracing::error!("failed to load forms: {e}");
            APP_STATE
                .write()
                .ui
                .set_status(format!("Could not load forms: {e}"), StatusLevel::Error);
        }
    }
}

// ============================================================================
// Forms Page
// ============================================================================

/// Forms list for the active project
#[component]
pub fn FormsPage() -> Element {
    use_effect(|| {
        spawn(refresh_forms());
    });

    let state = APP_STATE.read();
    let forms = state.forms.clone();
    let connected = state.session.client.is_some();
    let has_project = state.has_project();
    drop(state);

    let rows = forms.iter().map(|form| {
        let id = form.id;
        let icon = template_by_id(&form.form_type).map_or("📄", |t| t.icon);
        let badge_class = if form.is_active {
            "badge badge-active"
        } else {
            "badge badge-disabled"
        };
        let created = form
            .created_at
            .map(|t| t.format("%b %e, %Y").to_string())
            .unwrap_or_default();

        rsx! {
            button {
                key: "{id}",
                class: "form-row",
                onclick: move |_| {
                    APP_STATE.write().ui.navigate(Page::FormEditor(id));
                },

                span { class: "form-row-icon", "{icon}" }

                div {
                    class: "form-row-main",
                    span { class: "form-row-name", "{form.name}" }
                    span { class: "form-row-slug", "/{form.slug}" }
                }

                span { class: "form-row-created", "{created}" }
                span { class: "{badge_class}", "{form.status_label()}" }
                span { class: "form-row-version", "v{form.version}" }
            }
        }
    });

    rsx! {
        div {
            class: "page",

            // Page Header
            div {
                class: "page-header",

                div {
                    h1 { class: "page-title", "📋 Forms" }
                    p { class: "page-subtitle", "Managed forms in this project" }
                }

                div {
                    class: "page-header-actions",

                    button {
                        class: "btn btn-secondary",
                        disabled: !connected,
                        onclick: move |_| {
                            spawn(refresh_forms());
                        },
                        "Refresh"
                    }

                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            APP_STATE.write().ui.navigate(Page::NewForm);
                        },
                        "✨ New Form"
                    }
                }
            }

            if !connected {
                div {
                    class: "empty-state",
                    p { class: "empty-state-title", "Not connected" }
                    p {
                        class: "empty-state-hint",
                        "Set FORMDECK_API_URL and FORMDECK_API_KEY to connect this studio to your workspace."
                    }
                }
            } else if !has_project {
                div {
                    class: "empty-state",
                    p { class: "empty-state-title", "No project selected" }
                    p {
                        class: "empty-state-hint",
                        "Waiting for the session to resolve a project context."
                    }
                }
            } else if forms.is_empty() {
                div {
                    class: "empty-state",
                    p { class: "empty-state-icon", "🗂️" }
                    p { class: "empty-state-title", "No forms yet" }
                    p { class: "empty-state-hint", "Create your first form from a template." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            APP_STATE.write().ui.navigate(Page::NewForm);
                        },
                        "✨ New Form"
                    }
                }
            } else {
                div {
                    class: "form-list",
                    {rows}
                }
            }
        }
    }
}
