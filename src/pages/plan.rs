//! The 30-minute daily practice.
//!
//! Extended journeys show it as a numbered checklist; compact journeys show a
//! single dashboard sheet with practice links.

use dioxus::prelude::*;
use mastery_core::{ActivityBody, JourneyVariant, PlanLink, PlanSheet, PracticePlan, Step};
use mastery_ui::{Card, Input, TextArea};

use crate::components::StepHeading;
use crate::context::use_wizard;

#[component]
pub fn PlanPage() -> Element {
    let variant = use_wizard().read().config().variant;

    rsx! {
        div { class: "step-page plan-page",
            StepHeading { step: Step::Plan }
            match variant {
                JourneyVariant::Extended => rsx! { PlanChecklist {} },
                JourneyVariant::Compact => rsx! { PlanDashboard {} },
            }
        }
    }
}

#[component]
fn PlanChecklist() -> Element {
    let PracticePlan { activities } = use_wizard().read().practice_plan();

    rsx! {
        ol { class: "plan-list",
            for activity in activities {
                li { class: "plan-item",
                    span { class: "plan-item__title", "{activity.name} - {activity.minutes} minutes" }
                    match activity.body {
                        ActivityBody::Guidance(text) => rsx! { p { "{text}" } },
                        ActivityBody::Mantra(lines) => rsx! {
                            p { "Mantra:" }
                            ul { class: "mantra",
                                for line in lines {
                                    li { "\u{201C}{line}\u{201D}" }
                                }
                            }
                        },
                        ActivityBody::Text(text) => rsx! { p { class: "script-text", "{text}" } },
                        ActivityBody::Images(images) => rsx! {
                            div { class: "overview-grid",
                                for (goal, image) in images {
                                    img { class: "board-image", src: "{image.data_uri}", alt: "{goal}" }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn PlanDashboard() -> Element {
    let mut wizard = use_wizard();
    let (sheet, board_title) = {
        let w = wizard.read();
        (w.plan_sheet(), w.config().board_title().to_uppercase())
    };
    let PlanSheet {
        links,
        vision_image,
        goal_statement,
        fear,
        hooponopono,
        gratitude,
        affirmation,
        script,
    } = sheet;

    rsx! {
        div { class: "plan-dashboard",
            div { class: "dashboard-row",
                for link in [PlanLink::Breathing, PlanLink::Silence] {
                    Card { title: link.label().to_string(),
                        Input {
                            id: format!("plan-link-{:?}", link).to_lowercase(),
                            input_type: "url".to_string(),
                            value: links.get(link).to_string(),
                            placeholder: link.placeholder().to_string(),
                            oninput: move |v: String| wizard.write().set_plan_link(link, v),
                        }
                    }
                }
            }

            Card { title: board_title,
                div { class: "dashboard-board",
                    div { class: "dashboard-image",
                        if let Some(image) = vision_image {
                            img { class: "board-image", src: "{image.data_uri}", alt: "Vision Board" }
                        } else {
                            div { class: "image-placeholder", "No image uploaded yet." }
                        }
                    }
                    div { class: "dashboard-side",
                        Card { title: "GOALS".to_string(),
                            p { class: "statement", {goal_statement.unwrap_or_default()} }
                        }
                        Card { title: "LIMITING BELIEF + HO'OPONOPONO".to_string(),
                            p { class: "statement", "{fear}" }
                            TextArea {
                                id: "hooponopono".to_string(),
                                value: hooponopono.to_string(),
                                readonly: true,
                                rows: 2,
                            }
                        }
                    }
                }
                div { class: "dashboard-row",
                    Card { title: "GRATITUDE".to_string(),
                        p { class: "statement", {gratitude.unwrap_or_default()} }
                    }
                    Card { title: "AFFIRMATION".to_string(),
                        p { class: "statement", {affirmation.unwrap_or_default()} }
                    }
                }
                Card { title: "READ YOUR LIFE SCRIPT".to_string(),
                    p { class: "script-text", "{script}" }
                }
            }
        }
    }
}
