use dioxus::prelude::*;
use mastery_core::Step;

/// Page title plus the section's instructions, if it has any.
#[component]
pub fn StepHeading(step: Step, #[props(default)] title: Option<String>) -> Element {
    let title = title.unwrap_or_else(|| step.title().to_string());

    rsx! {
        h2 { class: "section-header", "{title}" }
        if let Some(text) = step.instructions() {
            p { class: "instructions", "{text}" }
        }
    }
}
