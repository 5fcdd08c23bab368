//! Application State Management for Formdeck
//!
//! Centralized state using Dioxus 0.7 Signals: page navigation, the status
//! bar, the signed-in session (project context, entitlements, table store
//! client), and the cached forms list.

use dioxus::prelude::*;
use formdeck_client::TableStoreClient;
use formdeck_core::{Entitlements, FormId, FormRecord, ProjectContext, SessionInfo};

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages/views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Forms list for the active project
    #[default]
    Forms,
    /// Form creation wizard
    NewForm,
    /// Editor landing view for one form
    FormEditor(FormId),
}

impl Page {
    /// Get the display name for this page
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Forms => "Forms",
            Page::NewForm => "New Form",
            Page::FormEditor(_) => "Form Editor",
        }
    }

    /// Get the icon emoji for this page
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Forms => "📋",
            Page::NewForm => "✨",
            Page::FormEditor(_) => "✏️",
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (navigation, status bar)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    /// Currently active page
    pub active_page: Page,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    /// Navigate to a page
    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// CSS class for the status bar text
    pub fn class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "status-info",
            StatusLevel::Success => "status-success",
            StatusLevel::Warning => "status-warning",
            StatusLevel::Error => "status-error",
        }
    }
}

// ============================================================================
// Session State
// ============================================================================

/// The signed-in session: backend client, active project, entitlements.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Table store client; `None` when the app runs disconnected
    pub client: Option<TableStoreClient>,
    /// Active project context from the identity provider
    pub project: Option<ProjectContext>,
    /// Capability flags for the account
    pub entitlements: Entitlements,
    /// Whether the session endpoint has answered at least once
    pub bootstrapped: bool,
}

impl SessionState {
    /// Build the initial session from process environment configuration.
    pub fn from_env() -> Self {
        let client = match TableStoreClient::from_env() {
            Ok(Some(client)) => Some(client),
            Ok(None) => {
                tracing::warn!("no table store configured - running disconnected");
                None
            }
            Err(e) => {
                tracing::error!("invalid table store configuration: {e}");
                None
            }
        };

        Self {
            client,
            ..Self::default()
        }
    }

    /// Apply the session payload fetched from the backend.
    pub fn apply(&mut self, info: SessionInfo) {
        self.project = info.project;
        self.entitlements = info.entitlements;
        self.bootstrapped = true;
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Signed-in session
    pub session: SessionState,
    /// Cached forms for the active project, newest first
    pub forms: Vec<FormRecord>,
    /// UI state
    pub ui: UiState,
}

impl AppState {
    /// Create application state, resolving the client from the environment
    pub fn new() -> Self {
        Self {
            session: SessionState::from_env(),
            ..Self::default()
        }
    }

    /// Check if a project context is available
    pub fn has_project(&self) -> bool {
        self.session.project.is_some()
    }

    /// Get the active project name (or a placeholder)
    pub fn project_name(&self) -> &str {
        self.session
            .project
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("No project")
    }

    /// Replace the cached forms list
    pub fn set_forms(&mut self, forms: Vec<FormRecord>) {
        self.forms = forms;
    }

    /// Remember a freshly created form at the top of the cache
    pub fn remember_form(&mut self, record: FormRecord) {
        self.forms.retain(|f| f.id != record.id);
        self.forms.insert(0, record);
    }

    /// Look up a cached form by id
    pub fn form(&self, id: FormId) -> Option<&FormRecord> {
        self.forms.iter().find(|f| f.id == id)
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal.
/// Use this in components to access and modify app state.
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// Tests
// ============================================================================
