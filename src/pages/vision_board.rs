//! Vision board page - one image per selected goal.

use dioxus::prelude::*;
use mastery_core::JourneyVariant;

use crate::components::{ContinueButton, VisionUpload};
use crate::context::use_wizard;

/// What is shown for one goal on the board
#[derive(Clone, PartialEq)]
struct BoardEntry {
    goal: String,
    image: Option<String>,
    statement: String,
    gratitude: Option<String>,
    affirmation: Option<String>,
}

#[component]
pub fn VisionBoardPage() -> Element {
    let wizard = use_wizard();
    let (title, show_statements, entries) = {
        let w = wizard.read();
        let answers = w.answers();
        let entries: Vec<BoardEntry> = answers
            .goals
            .iter()
            .enumerate()
            .map(|(i, (goal, detail))| BoardEntry {
                goal: goal.to_string(),
                image: answers.vision.get(goal).map(|img| img.data_uri.clone()),
                statement: detail.map(|d| d.what_to_achieve.clone()).unwrap_or_default(),
                gratitude: answers.affirmations.gratitude.get(i).cloned(),
                affirmation: answers.affirmations.affirmations.get(i).cloned(),
            })
            .collect();
        (
            w.config().board_title(),
            w.config().variant == JourneyVariant::Extended,
            entries,
        )
    };

    rsx! {
        div { class: "step-page",
            h2 { class: "section-header", "{title}" }
            h3 { "Career Goals" }

            for entry in entries {
                div { class: "board-entry", key: "{entry.goal}",
                    h4 { class: "goal-title", "{entry.goal}" }
                    VisionUpload { goal: entry.goal.clone() }
                    if let Some(uri) = entry.image.clone() {
                        img { class: "board-image", src: "{uri}", alt: "{entry.goal}" }
                    }
                    if show_statements {
                        div { class: "board-statements",
                            p { class: "input-label", "Goal Statement:" }
                            p { class: "statement", "{entry.statement}" }
                            p { class: "input-label", "Gratitude Statement:" }
                            p { class: "statement", {entry.gratitude.clone().unwrap_or_default()} }
                            p { class: "input-label", "Affirmation Statement:" }
                            p { class: "statement", {entry.affirmation.clone().unwrap_or_default()} }
                        }
                    }
                }
            }

            ContinueButton {}
        }
    }
}
