//! Error types for Formdeck
//!
//! This module provides unified error handling across the workspace:
//! validation errors, configuration errors, table-store errors, and
//! serialization errors all converge on [`FormdeckError`].

use thiserror::Error;

/// The main error type for Formdeck
#[derive(Debug, Error)]
pub enum FormdeckError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// No active project context is available
    #[error("No active project - sign in and select a project first")]
    MissingProject,

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Table Store Errors
    // ========================================================================
    /// The backend rejected the request or returned an error envelope
    #[error("Table store error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The request never produced a usable response (DNS, TLS, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A row lookup came back empty
    #[error("Form not found: {0}")]
    FormNotFound(String),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FormdeckError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        FormdeckError::Validation(msg.into())
    }

    /// Create a backend error from a status code and message
    pub fn backend(status: u16, msg: impl Into<String>) -> Self {
        FormdeckError::Backend {
            status,
            message: msg.into(),
        }
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        FormdeckError::Transport(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        FormdeckError::Internal(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FormdeckError::Validation(_) | FormdeckError::MissingProject
        )
    }

    /// Check if this error came from the table store (backend or transport)
    pub fn is_store(&self) -> bool {
        matches!(
            self,
            FormdeckError::Backend { .. }
                | FormdeckError::Transport(_)
                | FormdeckError::FormNotFound(_)
        )
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            FormdeckError::MissingConfig(_) | FormdeckError::InvalidConfig(_)
        )
    }
}

/// Result type alias using FormdeckError
pub type FormdeckResult<T> = Result<T, FormdeckError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = FormdeckError::validation("Name is required");
        assert!(err.is_validation());
        assert!(!err.is_store());
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[test]
    fn test_missing_project_is_validation() {
        let err = FormdeckError::MissingProject;
        assert!(err.is_validation());
        assert!(!err.is_config());
    }

    #[test]
    fn test_backend_error() {
        let err = FormdeckError::backend(409, "slug already exists");
        assert!(err.is_store());
        assert_eq!(
            err.to_string(),
            "Table store error (409): slug already exists"
        );
    }

    #[test]
    fn test_transport_error() {
        let err = FormdeckError::transport("connection refused");
        assert!(err.is_store());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_config_errors() {
        let err = FormdeckError::MissingConfig("FORMDECK_API_KEY".to_string());
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Missing required configuration: FORMDECK_API_KEY"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FormdeckError = json_err.into();
        assert!(matches!(err, FormdeckError::JsonSerialization(_)));
    }
}
