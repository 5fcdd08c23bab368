//! Template picker cards
//!
//! Selectable cards for the wizard's first step, plus the entitlement-gated
//! AI builder card. The AI creation path itself does not exist yet; the
//! card is a placeholder affordance either way, the flag only changes the
//! copy between "coming soon" and an upgrade prompt.

use dioxus::prelude::*;
use formdeck_core::FormTemplate;

// ============================================================================
// Template Card
// ============================================================================

/// Properties for TemplateCard
#[derive(Props, Clone, PartialEq)]
pub struct TemplateCardProps {
    /// Catalog entry to render
    pub template: &'static FormTemplate,

    /// Whether this card is the current selection
    #[props(default = false)]
    pub selected: bool,

    /// Click handler
    pub onclick: EventHandler<MouseEvent>,
}

/// One selectable template on the wizard's first step
#[component]
pub fn TemplateCard(props: TemplateCardProps) -> Element {
    let template = props.template;
    let card_class = if props.selected {
        "template-card selected"
    } else {
        "template-card"
    };

    rsx! {
        button {
            class: "{card_class}",
            r#type: "button",
            onclick: move |e| props.onclick.call(e),

            span { class: "template-icon", "{template.icon}" }

            div {
                class: "template-body",
                h3 { class: "template-name", "{template.name}" }
                p { class: "template-desc", "{template.description}" }

                if !template.fields.is_empty() {
                    div {
                        class: "field-chips",
                        for field in template.fields.iter() {
                            span {
                                key: "{field}",
                                class: "field-chip",
                                "{field}"
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// AI Builder Card
// ============================================================================

/// Upsell/placeholder card for the AI-assisted creation path.
///
/// Never clickable - the entitlement flag only decides which copy is shown.
#[component]
pub fn AiBuilderCard(entitled: bool) -> Element {
    rsx! {
        div {
            class: "template-card ai-card",

            span { class: "template-icon", "🪄" }

            div {
                class: "template-body",
                h3 { class: "template-name", "AI Builder" }

                if entitled {
                    p { class: "template-desc", "Describe your form and let AI draft it. Coming soon." }
                    span { class: "badge badge-soon", "Coming soon" }
                } else {
                    p { class: "template-desc", "Describe your form and let AI draft it." }
                    span { class: "badge badge-upgrade", "Upgrade to unlock" }
                }
            }
        }
    }
}
