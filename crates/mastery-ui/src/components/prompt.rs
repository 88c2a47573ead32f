//! Collapsible question item.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct PromptItemProps {
    /// The question, shown in the clickable header
    pub prompt: String,
    /// Marks the header once the answer is filled in
    #[props(default = false)]
    pub answered: bool,
    #[props(default = false)]
    pub open: bool,
    pub children: Element,
}

/// One accordion entry built on `details`/`summary`.
#[component]
pub fn PromptItem(props: PromptItemProps) -> Element {
    rsx! {
        details { class: "prompt-item", open: props.open,
            summary { class: "prompt-summary",
                span { "{props.prompt}" }
                if props.answered {
                    span { class: "prompt-check", "\u{2713}" }
                }
            }
            div { class: "prompt-body", {props.children} }
        }
    }
}
