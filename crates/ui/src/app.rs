//! Main Application Component for Formdeck
//!
//! The root Dioxus component: header, the active page, and the status bar.
//! Also owns the session bootstrap that runs once on startup.

use dioxus::prelude::*;

use crate::pages::{FormEditorPage, FormWizardPage, FormsPage};
use crate::state::{APP_STATE, Page, StatusLevel};

// ============================================================================
// Session Bootstrap
// ============================================================================

/// Fetch the session context (project + entitlements), then the forms list.
///
/// Every failure is local: logged, surfaced in the status bar, never fatal.
async fn bootstrap_session() {
    let client = APP_STATE.read().session.client.clone();
    let Some(client) = client else {
        return;
    };

    match client.fetch_session().await {
        Ok(info) => {
            let project_name = info.project.as_ref().map(|p| p.name.clone());
            APP_STATE.write().session.apply(info);

            match project_name {
                Some(name) => {
                    tracing::info!("session ready for project '{name}'");
                    crate::pages::forms::refresh_forms().await;
                }
                None => {
                    APP_STATE.write().ui.set_status(
                        "No project selected for this account",
                        StatusLevel::Warning,
                    );
                }
            }
        }
        Err(e) => {
            tracing::error!("session bootstrap failed: {e}");
            APP_STATE.write().ui.set_status(
                format!("Could not reach the table store: {e}"),
                StatusLevel::Error,
            );
        }
    }
}

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Formdeck UI initialized");
        spawn(bootstrap_session());
    });

    let active_page = APP_STATE.read().ui.active_page;

    rsx! {
        div {
            class: "app-container",

            Header {}

            main {
                class: "main-content",

                match active_page {
                    Page::Forms => rsx! { FormsPage {} },
                    Page::NewForm => rsx! { FormWizardPage {} },
                    Page::FormEditor(form_id) => rsx! { FormEditorPage { form_id } },
                }
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Top bar with app identity and the active project
#[component]
fn Header() -> Element {
    let state = APP_STATE.read();
    let project_name = state.project_name().to_string();
    let has_project = state.has_project();
    let active_page = state.ui.active_page;
    drop(state);

    rsx! {
        header {
            class: "toolbar",

            div {
                class: "toolbar-title",
                span { class: "toolbar-logo", "🗂️" }
                span { "Formdeck" }
            }

            div {
                class: "toolbar-project",
                if has_project {
                    span { class: "toolbar-project-label", "Project:" }
                    span { class: "toolbar-project-name", "{project_name}" }
                } else {
                    span { class: "toolbar-project-label", "{project_name}" }
                }
            }

            if active_page == Page::Forms {
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| {
                        APP_STATE.write().ui.navigate(Page::NewForm);
                    },
                    "✨ New Form"
                }
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.ui.status_message.clone();
    let connected = state.session.client.is_some();
    let form_count = state.forms.len();
    drop(state);

    rsx! {
        footer {
            class: "status-bar",

            if let Some(msg) = status {
                span { class: "{msg.level.class()}", "{msg.text}" }
            } else {
                span { class: "status-info", "Ready" }
            }

            div { class: "status-spacer" }

            span { "Forms: {form_count}" }
            span {
                class: if connected { "status-success" } else { "status-warning" },
                if connected { "● connected" } else { "○ offline" }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_icon() {
        assert_eq!(Page::Forms.icon(), "📋");
        assert_eq!(Page::NewForm.icon(), "✨");
    }

    #[test]
    fn test_page_display_name() {
        assert_eq!(Page::Forms.display_name(), "Forms");
        assert_eq!(Page::NewForm.display_name(), "New Form");
    }
}
