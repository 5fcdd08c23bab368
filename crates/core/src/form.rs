//! Form records
//!
//! The persisted `forms` row and its insert payload. Field names on these
//! types are the wire contract with the table store - renaming one here is
//! a backend schema change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slug::effective_slug;
use crate::types::{FormId, ProjectId};

/// Type tag stored when a form was created without any template.
pub const FORM_TYPE_CUSTOM: &str = "custom";

// ============================================================================
// Persisted Record
// ============================================================================

/// A row in the `forms` collection, as returned by the table store.
///
/// Created exactly once by the creation wizard; every later mutation
/// (fields, activation, publishing) happens in the form editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    pub id: FormId,
    pub project_id: ProjectId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Template identifier the form was created from, or [`FORM_TYPE_CUSTOM`]
    pub form_type: String,
    /// New forms start disabled until published from the editor
    pub is_active: bool,
    pub version: u32,
    /// Set by the backend on insert; absent on older rows
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl FormRecord {
    /// Human label for the activation state
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Disabled" }
    }
}

// ============================================================================
// Insert Payload
// ============================================================================

/// Insert payload for one new `forms` row.
///
/// The backend assigns `id` and `created_at` and echoes the full
/// [`FormRecord`] back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewForm {
    pub project_id: ProjectId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub form_type: String,
    pub is_active: bool,
    pub version: u32,
}

impl NewForm {
    /// Assemble an insert payload from raw wizard input.
    ///
    /// Returns `None` when the name is empty after trimming - the one
    /// precondition creation has. Everything else normalizes: the slug falls
    /// back to a derivation of the name, a blank description is stored as
    /// null rather than an empty string, and a missing template maps to the
    /// [`FORM_TYPE_CUSTOM`] tag. New rows always start disabled at version 1.
    pub fn from_input(
        project_id: ProjectId,
        name: &str,
        slug: &str,
        description: &str,
        template_id: Option<&str>,
    ) -> Option<Self> {
        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return None;
        }

        let description = description.trim();

        Some(Self {
            project_id,
            name: trimmed_name.to_string(),
            slug: effective_slug(slug, name),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            form_type: template_id.unwrap_or(FORM_TYPE_CUSTOM).to_string(),
            is_active: false,
            version: 1,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project_id() -> ProjectId {
        "5f0c9a52-27f4-4d2f-9b61-0d7b1f1f2a3c".parse().unwrap()
    }

    #[test]
    fn test_from_input_rejects_blank_name() {
        assert!(NewForm::from_input(project_id(), "", "", "", None).is_none());
        assert!(NewForm::from_input(project_id(), "   ", "slug", "desc", Some("lead")).is_none());
    }

    #[test]
    fn test_from_input_lead_capture_scenario() {
        // Template "Lead Capture" selected, then the name replaced by hand
        let form = NewForm::from_input(project_id(), "My Leads", "", "", Some("lead")).unwrap();

        assert_eq!(form.name, "My Leads");
        assert_eq!(form.slug, "my-leads");
        assert_eq!(form.form_type, "lead");
        assert_eq!(form.description, None);
        assert!(!form.is_active);
        assert_eq!(form.version, 1);
    }

    #[test]
    fn test_from_input_explicit_slug_wins() {
        let form =
            NewForm::from_input(project_id(), "Anything", "my-own-slug", "", None).unwrap();
        assert_eq!(form.slug, "my-own-slug");
    }

    #[test]
    fn test_from_input_description_normalization() {
        let form = NewForm::from_input(project_id(), "A", "", "  hello  ", None).unwrap();
        assert_eq!(form.description.as_deref(), Some("hello"));

        let form = NewForm::from_input(project_id(), "A", "", "   ", None).unwrap();
        assert_eq!(form.description, None);
    }

    #[test]
    fn test_from_input_custom_fallback() {
        let form = NewForm::from_input(project_id(), "A", "", "", None).unwrap();
        assert_eq!(form.form_type, FORM_TYPE_CUSTOM);

        // The blank template still supplies its own id, never "custom"
        let form = NewForm::from_input(project_id(), "A", "", "", Some("blank")).unwrap();
        assert_eq!(form.form_type, "blank");
    }

    #[test]
    fn test_wire_field_names() {
        let form = NewForm::from_input(project_id(), "My Leads", "", "", Some("lead")).unwrap();
        let value = serde_json::to_value(&form).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "project_id",
            "name",
            "slug",
            "description",
            "form_type",
            "is_active",
            "version",
        ] {
            assert!(object.contains_key(key), "payload missing field {key}");
        }
        // Blank description serializes as an explicit null, not an omission
        assert!(object["description"].is_null());
        assert_eq!(object["is_active"], serde_json::json!(false));
        assert_eq!(object["version"], serde_json::json!(1));
    }

    #[test]
    fn test_record_roundtrip_without_created_at() {
        let json = r#"{
            "id": "0a321b62-b1a8-4bb5-9d5d-3a8a2e1c9f10",
            "project_id": "5f0c9a52-27f4-4d2f-9b61-0d7b1f1f2a3c",
            "name": "My Leads",
            "slug": "my-leads",
            "description": null,
            "form_type": "lead",
            "is_active": false,
            "version": 1
        }"#;

        let record: FormRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.slug, "my-leads");
        assert_eq!(record.created_at, None);
        assert_eq!(record.status_label(), "Disabled");
    }
}
