//! # Formdeck UI
//!
//! Dioxus Desktop UI for Formdeck.
//!
//! The studio has three screens: the forms list, the two-step creation
//! wizard, and the editor landing view. State lives in a single global
//! signal ([`state::APP_STATE`]); network work goes through
//! [`formdeck_client`] and always resolves back into that signal.

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod wizard;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use formdeck_client;
pub use formdeck_core;

// Re-export main components
pub use app::App;
pub use pages::{FormEditorPage, FormWizardPage, FormsPage};
pub use state::{APP_STATE, AppState, Page, SessionState, StatusLevel, StatusMessage, UiState};
pub use wizard::{WizardState, WizardStep};

// Re-export components
pub use components::{AiBuilderCard, TemplateCard, TextArea, TextInput};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Formdeck";

/// Application display title
pub const TITLE: &str = "Formdeck - Managed Forms Studio";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Formdeck desktop application.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     formdeck_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Embed the stylesheet so the app ships as a single binary
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 760.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(720.0, 540.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        // Verify the stylesheet is embedded and carries the core classes
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".btn"));
        assert!(STYLES.contains(".template-card"));
        assert!(STYLES.contains(".status-bar"));
    }
}
