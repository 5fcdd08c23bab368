//! Form input components
//!
//! The two styled controls the studio's forms use: a single-line
//! [`TextInput`] and a multi-line [`TextArea`]. Both render a label, an
//! optional help line, and an error state.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Whether the input grabs focus on mount
    #[props(default = false)]
    pub autofocus: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "label",
                    "{label}"
                    if props.required {
                        span { class: "required-mark", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                autofocus: props.autofocus,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(props.value.clone());
                    }
                },
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message
    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "label",
                    "{label}"
                }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                "{props.value}"
            }

            FieldFooter { error: props.error.clone(), help_text: props.help_text.clone() }
        }
    }
}

// ============================================================================
// Shared Pieces
// ============================================================================

/// Help-or-error line below a field
#[component]
fn FieldFooter(error: Option<String>, help_text: Option<String>) -> Element {
    rsx! {
        if let Some(error) = &error {
            p { class: "error-text", "{error}" }
        } else if let Some(help) = &help_text {
            p { class: "help-text", "{help}" }
        }
    }
}

/// Build the class string for an input or textarea
fn input_class(has_error: bool, disabled: bool) -> String {
    let mut class = String::from("input");
    if has_error {
        class.push_str(" input-error");
    }
    if disabled {
        class.push_str(" input-disabled");
    }
    class
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_plain() {
        assert_eq!(input_class(false, false), "input");
    }

    #[test]
    fn test_input_class_error() {
        assert_eq!(input_class(true, false), "input input-error");
    }

    #[test]
    fn test_input_class_disabled() {
        assert_eq!(input_class(false, true), "input input-disabled");
    }
}
