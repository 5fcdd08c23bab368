//! # UI Components
//!
//! Reusable Dioxus components for the Formdeck studio:
//!
//! - **Inputs**: styled text input and textarea used by the wizard's details step
//! - **Template cards**: the selectable catalog cards on the wizard's first step

pub mod inputs;
pub mod template_card;

pub use inputs::{TextArea, TextInput};
pub use template_card::{AiBuilderCard, TemplateCard};
