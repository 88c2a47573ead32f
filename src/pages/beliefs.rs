//! Limiting belief page - a guided five-question reflection.

use dioxus::prelude::*;
use mastery_core::catalog::LIMITING_BELIEFS_OUTLINE;
use mastery_core::{BeliefField, Step};
use mastery_ui::{Input, PromptItem, TextArea};

use crate::components::{ContinueButton, StepHeading};
use crate::context::use_wizard;

#[component]
pub fn BeliefsPage() -> Element {
    let mut wizard = use_wizard();
    let belief = wizard.read().answers().belief.clone();

    // Show each stage heading once, above its first question
    let mut last_stage = "";
    let rows: Vec<(Option<&'static str>, BeliefField)> = BeliefField::ALL
        .into_iter()
        .map(|field| {
            let stage = field.stage();
            let heading = (stage != last_stage).then_some(stage);
            last_stage = stage;
            (heading, field)
        })
        .collect();

    rsx! {
        div { class: "step-page",
            StepHeading { step: Step::Beliefs }
            p { class: "instructions", "{LIMITING_BELIEFS_OUTLINE}" }

            for (heading, field) in rows {
                {
                    let value = belief.get(field).to_string();
                    let answered = !value.trim().is_empty();
                    let on_change = move |v: String| wizard.write().set_belief_field(field, v);
                    rsx! {
                        if let Some(heading) = heading {
                            h3 { class: "stage-title", "{heading}" }
                        }
                        PromptItem { prompt: field.prompt().to_string(), answered,
                            if let Some(example) = field.example() {
                                p { class: "input-hint", "Example: \u{201C}{example}\u{201D}" }
                            }
                            if field.multiline() {
                                TextArea {
                                    id: field.key().to_string(),
                                    value,
                                    oninput: on_change,
                                    placeholder: field.placeholder().to_string(),
                                }
                            } else {
                                Input {
                                    id: field.key().to_string(),
                                    value,
                                    oninput: on_change,
                                    placeholder: field.placeholder().to_string(),
                                }
                            }
                        }
                    }
                }
            }

            ContinueButton {}
        }
    }
}
