//! Vision board overview - one card per goal, then the script.

use dioxus::prelude::*;
use mastery_core::{Overview, Step};

use crate::components::{ContinueButton, StepHeading};
use crate::context::use_wizard;

#[component]
pub fn OverviewPage() -> Element {
    let Overview { cards, script } = use_wizard().read().overview();

    rsx! {
        div { class: "step-page",
            StepHeading { step: Step::Overview }

            div { class: "overview-grid",
                for card in cards {
                    div { class: "board-entry", key: "{card.goal}",
                        h3 { class: "goal-title", "{card.goal}" }
                        if let Some(image) = card.image.clone() {
                            img { class: "board-image", src: "{image.data_uri}", alt: "{card.goal}" }
                        }
                        h4 { "Career Goal Statement" }
                        p { class: "statement", "{card.goal_statement}" }
                        h4 { "Limiting Belief to be Addressed" }
                        p { class: "statement", "{card.limiting_belief}" }
                        h4 { "Affirmation Statement" }
                        p { class: "statement", {card.affirmation.clone().unwrap_or_default()} }
                        h4 { "Gratitude Statement" }
                        p { class: "statement", {card.gratitude.clone().unwrap_or_default()} }
                    }
                }
            }

            div { class: "statement-group",
                h3 { "Career Goal Manifestation Script" }
                p { class: "script-text", "{script}" }
            }

            ContinueButton {}
        }
    }
}
