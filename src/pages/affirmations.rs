//! Affirmations & gratitude page.

use dioxus::prelude::*;
use mastery_core::Step;
use mastery_ui::{Button, ButtonVariant};

use crate::components::{ContinueButton, StepHeading};
use crate::context::use_wizard;

#[component]
pub fn AffirmationsPage() -> Element {
    let mut wizard = use_wizard();
    let generated = wizard.read().answers().affirmations.clone();

    rsx! {
        div { class: "step-page",
            StepHeading { step: Step::Affirmations }

            div { class: "statement-group",
                h3 { "Affirmations" }
                for line in generated.affirmations.iter() {
                    p { class: "statement", "{line}" }
                }
            }
            div { class: "statement-group",
                h3 { "Gratitude Statements" }
                for line in generated.gratitude.iter() {
                    p { class: "statement", "{line}" }
                }
            }

            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| wizard.write().generate_affirmations(),
                "Regenerate from my goals"
            }
            ContinueButton {}
        }
    }
}
