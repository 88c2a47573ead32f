use dioxus::prelude::*;
use mastery_ui::Button;

use crate::context::use_wizard;

/// Full-width call to action at the bottom of a page, labelled after the
/// step it leads to. Renders nothing on the last step.
#[component]
pub fn ContinueButton(#[props(default = false)] disabled: bool) -> Element {
    let mut wizard = use_wizard();
    let label = wizard.read().descriptor().continue_label;

    rsx! {
        if let Some(label) = label {
            Button {
                wide: true,
                disabled,
                onclick: move |_| {
                    wizard.write().advance();
                },
                "{label}"
            }
        }
    }
}
