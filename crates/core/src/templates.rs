//! Built-in form templates
//!
//! The static catalog shown on the wizard's first step. Templates are
//! immutable, defined at load time, and decoupled from any rendering
//! concern so the catalog can be tested on its own.

/// Identifier of the sentinel template for starting from scratch.
pub const BLANK_TEMPLATE_ID: &str = "blank";

/// A catalog entry describing a starting point for a new form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTemplate {
    /// Stable identifier, also stored as the created form's type tag
    pub id: &'static str,
    /// Display name, pre-filled as the form name on selection
    pub name: &'static str,
    pub description: &'static str,
    /// Icon handle rendered on the template card
    pub icon: &'static str,
    /// Field names the template implies, in display order
    pub fields: &'static [&'static str],
}

impl FormTemplate {
    /// Whether this is the blank sentinel (implies no fields, no pre-fill)
    pub fn is_blank(&self) -> bool {
        self.id == BLANK_TEMPLATE_ID
    }
}

static TEMPLATES: [FormTemplate; 5] = [
    FormTemplate {
        id: "contact",
        name: "Contact Form",
        description: "Name, email and a free-text message",
        icon: "📬",
        fields: &["name", "email", "message"],
    },
    FormTemplate {
        id: "lead",
        name: "Lead Capture",
        description: "Capture qualified leads with company context",
        icon: "🧲",
        fields: &["name", "email", "company", "phone"],
    },
    FormTemplate {
        id: "feedback",
        name: "Customer Feedback",
        description: "Rating plus open-ended comments",
        icon: "💬",
        fields: &["rating", "comments", "email"],
    },
    FormTemplate {
        id: "registration",
        name: "Event Registration",
        description: "Attendee details for events and webinars",
        icon: "🎟️",
        fields: &["name", "email", "tickets", "notes"],
    },
    FormTemplate {
        id: BLANK_TEMPLATE_ID,
        name: "Blank Form",
        description: "Start from scratch in the editor",
        icon: "📄",
        fields: &[],
    },
];

/// All built-in templates, in display order (blank last).
pub fn builtin_templates() -> &'static [FormTemplate] {
    &TEMPLATES
}

/// Look up a template by its identifier.
pub fn template_by_id(id: &str) -> Option<&'static FormTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

// ============================================================================
// Tests
// ============================================================================
