//! Form creation wizard state and logic
//!
//! The wizard is a two-step flow: pick a template, then fill in the details
//! and create the form. Everything here is plain state so the transitions,
//! pre-fill rules, and the submit payload are testable without a UI.

use formdeck_core::{FormTemplate, NewForm, ProjectId};

// ============================================================================
// Steps
// ============================================================================

/// Wizard step enumeration.
///
/// Rendering matches on this exhaustively; there is no third screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    TemplatePick,
    Details,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::TemplatePick => "Choose a template",
            WizardStep::Details => "Form details",
        }
    }
}

// ============================================================================
// Wizard State
// ============================================================================

/// Wizard runtime state.
///
/// Lives for one visit to the creation page; discarded on navigation away.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub step: WizardStep,
    /// Chosen template; `None` until the first step is answered
    pub selected_template: Option<&'static FormTemplate>,

    // Editable fields
    pub name: String,
    pub slug: String,
    pub description: String,

    /// In-flight guard for the single create request
    pub is_saving: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a template and advance to the details step.
    ///
    /// Any non-blank template pre-fills the name and slug from its display
    /// name and identifier; the blank sentinel leaves whatever the user
    /// already typed untouched. Both fields stay editable afterwards.
    pub fn select_template(&mut self, template: &'static FormTemplate) {
        if !template.is_blank() {
            self.name = template.name.to_string();
            self.slug = template.id.to_string();
        }
        self.selected_template = Some(template);
        self.step = WizardStep::Details;
    }

    /// Return to the template step, keeping the selection and entered text.
    pub fn back(&mut self) {
        self.step = WizardStep::TemplatePick;
    }

    /// Identifier of the chosen template, if any.
    pub fn template_id(&self) -> Option<&'static str> {
        self.selected_template.map(|t| t.id)
    }

    /// Whether the create control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_saving && !self.name.trim().is_empty()
    }

    /// Claim the in-flight slot. Returns `false` when a create request is
    /// already running, so a second invocation cannot race the first.
    pub fn begin_save(&mut self) -> bool {
        if self.is_saving {
            return false;
        }
        self.is_saving = true;
        true
    }

    /// Release the in-flight slot so the user can retry after a failure.
    pub fn finish_save(&mut self) {
        self.is_saving = false;
    }

    /// Assemble the insert payload for the active project.
    ///
    /// `None` when the trimmed name is empty - in that case submit is a
    /// no-op and no request is made.
    pub fn draft(&self, project_id: ProjectId) -> Option<NewForm> {
        NewForm::from_input(
            project_id,
            &self.name,
            &self.slug,
            &self.description,
            self.template_id(),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use formdeck_core::{BLANK_TEMPLATE_ID, builtin_templates, template_by_id};
    use pretty_assertions::assert_eq;

    fn project_id() -> ProjectId {
        "5f0c9a52-27f4-4d2f-9b61-0d7b1f1f2a3c".parse().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let wizard = WizardState::new();
        assert_eq!(wizard.step, WizardStep::TemplatePick);
        assert!(wizard.selected_template.is_none());
        assert!(!wizard.is_saving);
        assert!(!wizard.can_submit());
    }

    #[test]
    fn test_every_template_advances_and_prefills() {
        for template in builtin_templates() {
            let mut wizard = WizardState::new();
            wizard.select_template(template);

            assert_eq!(wizard.step, WizardStep::Details);
            assert_eq!(wizard.template_id(), Some(template.id));
            if !template.is_blank() {
                assert_eq!(wizard.name, template.name);
                assert_eq!(wizard.slug, template.id);
            }
        }
    }

    #[test]
    fn test_blank_template_leaves_fields_untouched() {
        let mut wizard = WizardState::new();
        wizard.name = "Typed earlier".to_string();
        wizard.slug = "typed-earlier".to_string();

        wizard.select_template(template_by_id(BLANK_TEMPLATE_ID).unwrap());

        assert_eq!(wizard.step, WizardStep::Details);
        assert_eq!(wizard.name, "Typed earlier");
        assert_eq!(wizard.slug, "typed-earlier");
    }

    #[test]
    fn test_back_preserves_everything() {
        let mut wizard = WizardState::new();
        wizard.select_template(template_by_id("lead").unwrap());
        wizard.name = "My Leads".to_string();
        wizard.description = "quarterly push".to_string();

        wizard.back();
        assert_eq!(wizard.step, WizardStep::TemplatePick);
        assert_eq!(wizard.name, "My Leads");
        assert_eq!(wizard.description, "quarterly push");
        assert_eq!(wizard.template_id(), Some("lead"));
    }

    #[test]
    fn test_draft_requires_name() {
        let mut wizard = WizardState::new();
        wizard.select_template(template_by_id(BLANK_TEMPLATE_ID).unwrap());
        assert!(wizard.draft(project_id()).is_none());

        wizard.name = "   ".to_string();
        assert!(wizard.draft(project_id()).is_none());
        assert!(!wizard.can_submit());
    }

    #[test]
    fn test_lead_capture_scenario() {
        // Select "Lead Capture", replace the pre-filled name, clear the slug
        let mut wizard = WizardState::new();
        wizard.select_template(template_by_id("lead").unwrap());
        assert_eq!(wizard.name, "Lead Capture");
        assert_eq!(wizard.slug, "lead");

        wizard.name = "My Leads".to_string();
        wizard.slug = String::new();

        let draft = wizard.draft(project_id()).unwrap();
        assert_eq!(draft.name, "My Leads");
        assert_eq!(draft.slug, "my-leads");
        assert_eq!(draft.form_type, "lead");
        assert_eq!(draft.description, None);
        assert!(!draft.is_active);
        assert_eq!(draft.version, 1);
    }

    #[test]
    fn test_blank_template_keeps_its_own_type_tag() {
        let mut wizard = WizardState::new();
        wizard.select_template(template_by_id(BLANK_TEMPLATE_ID).unwrap());
        wizard.name = "From scratch".to_string();

        let draft = wizard.draft(project_id()).unwrap();
        // The blank sentinel stores "blank", not "custom"
        assert_eq!(draft.form_type, "blank");
    }

    #[test]
    fn test_explicit_slug_wins_over_name() {
        let mut wizard = WizardState::new();
        wizard.select_template(template_by_id("contact").unwrap());
        wizard.name = "Completely Different".to_string();

        let draft = wizard.draft(project_id()).unwrap();
        assert_eq!(draft.slug, "contact");
    }

    #[test]
    fn test_single_flight_guard() {
        let mut wizard = WizardState::new();
        wizard.name = "My Leads".to_string();

        assert!(wizard.begin_save());
        assert!(!wizard.begin_save());
        assert!(!wizard.can_submit());

        // A failed request releases the guard so retry works
        wizard.finish_save();
        assert!(wizard.begin_save());
    }
}
