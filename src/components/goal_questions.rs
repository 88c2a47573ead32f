//! The five questions for one selected goal.

use dioxus::prelude::*;
use mastery_core::GoalField;
use mastery_ui::{Input, PromptItem, TextArea};

use crate::context::use_wizard;

#[component]
pub fn GoalQuestions(index: usize, goal: String) -> Element {
    let mut wizard = use_wizard();
    let detail = wizard
        .read()
        .answers()
        .goals
        .detail(&goal)
        .cloned()
        .unwrap_or_default();

    rsx! {
        div { class: "goal-block",
            h3 { class: "goal-title", "{goal}" }
            div { class: "accordion",
                for field in GoalField::ALL {
                    {
                        let value = detail.get(field).to_string();
                        let answered = !value.trim().is_empty();
                        let id = format!("{}-{}", field.key(), index);
                        let goal = goal.clone();
                        let on_change = move |v: String| {
                            if let Err(e) = wizard.write().set_goal_field_for(&goal, field, v) {
                                tracing::warn!("Goal answer not stored: {}", e);
                            }
                        };
                        rsx! {
                            PromptItem { prompt: field.prompt().to_string(), answered,
                                if field.multiline() {
                                    TextArea {
                                        id,
                                        value,
                                        oninput: on_change,
                                        placeholder: field.placeholder().to_string(),
                                    }
                                } else {
                                    Input {
                                        id,
                                        value,
                                        oninput: on_change,
                                        placeholder: field.placeholder().to_string(),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
