//! Career goals page - pick up to three goals and answer five questions each.

use dioxus::prelude::*;
use mastery_core::catalog::CAREER_GOALS;
use mastery_core::Step;
use mastery_ui::ChoicePills;

use crate::components::{ContinueButton, GoalQuestions, StepHeading};
use crate::context::use_wizard;

#[component]
pub fn GoalsPage() -> Element {
    let mut wizard = use_wizard();
    let (selected, limit) = {
        let w = wizard.read();
        (w.answers().goals.goals().to_vec(), w.answers().goals.max())
    };
    let options: Vec<String> = CAREER_GOALS.iter().map(|g| g.to_string()).collect();
    let nothing_selected = selected.is_empty();
    let questions = selected.clone();

    rsx! {
        div { class: "step-page",
            StepHeading { step: Step::Goals }

            ChoicePills {
                options,
                selected,
                limit,
                label: format!("Select your goals (up to {})", limit),
                on_toggle: move |goal: String| {
                    wizard.write().select_goal(&goal);
                },
            }

            for (index, goal) in questions.into_iter().enumerate() {
                GoalQuestions { key: "{goal}", index, goal: goal.clone() }
            }

            ContinueButton { disabled: nothing_selected }
        }
    }
}
