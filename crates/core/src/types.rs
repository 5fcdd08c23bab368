//! Core types used throughout Formdeck
//!
//! Identifier aliases plus the session-scoped context types the backend
//! hands the client at sign-in: the active project and the account's
//! entitlement flags.

use serde::{Deserialize, Serialize};

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for form record unique identifiers
pub type FormId = uuid::Uuid;

/// Type alias for project unique identifiers
pub type ProjectId = uuid::Uuid;

// ============================================================================
// Session Context
// ============================================================================

/// The project a session is operating in.
///
/// Read-only from the client's point of view; the identity provider owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    pub id: ProjectId,
    pub name: String,
}

/// Capability flags for the signed-in account.
///
/// Only rendering decisions hang off these - no behavioral branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entitlements {
    /// Whether the AI form builder affordance is unlocked
    #[serde(default)]
    pub ai_builder: bool,
}

/// Session payload returned by the backend at bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Active project, if the account has one selected
    pub project: Option<ProjectContext>,
    /// Entitlement flags for the account
    #[serde(default)]
    pub entitlements: Entitlements,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_session_info_deserialization() {
        let json = r#"{
            "project": { "id": "5f0c9a52-27f4-4d2f-9b61-0d7b1f1f2a3c", "name": "Acme" },
            "entitlements": { "ai_builder": true }
        }"#;

        let info: SessionInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.project.as_ref().unwrap().name, "Acme");
        assert!(info.entitlements.ai_builder);
    }

    #[test]
    fn test_session_info_defaults() {
        // Older backends omit the entitlements object entirely
        let json = r#"{ "project": null }"#;

        let info: SessionInfo = serde_json::from_str(json).unwrap();
        assert!(info.project.is_none());
        assert!(!info.entitlements.ai_builder);
    }
}
