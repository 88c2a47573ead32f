//! Input Field Components
//!
//! Controlled single-line and multi-line text inputs. Every change is
//! reported through `oninput` with the full new value.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for the label's `for`
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, url, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "fear".to_string(),
///         value: belief.fear.clone(),
///         oninput: move |v| wizard.write().set_belief_field(BeliefField::Fear, v),
///         placeholder: "I fear ____________________.".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub value: String,
    #[props(default)]
    pub oninput: Option<EventHandler<String>>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = 4)]
    pub rows: u32,
    /// Render without an input handler
    #[props(default = false)]
    pub readonly: bool,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                readonly: props.readonly,
                value: "{props.value}",
                oninput: move |e| {
                    if let Some(handler) = &props.oninput {
                        handler.call(e.value());
                    }
                },
            }
        }
    }
}
