//! One page per wizard step.

mod affirmations;
mod beliefs;
mod goals;
mod intro;
mod overview;
mod plan;
mod script;
mod vision_board;
mod welcome;

use dioxus::prelude::*;
use mastery_core::Step;

use crate::context::use_wizard;

pub use affirmations::AffirmationsPage;
pub use beliefs::BeliefsPage;
pub use goals::GoalsPage;
pub use intro::IntroPage;
pub use overview::OverviewPage;
pub use plan::PlanPage;
pub use script::ScriptPage;
pub use vision_board::VisionBoardPage;
pub use welcome::WelcomePage;

/// Renders the page for the wizard's current step.
#[component]
pub fn StepView() -> Element {
    let step = use_wizard().read().current_step();

    match step {
        Step::Welcome => rsx! { WelcomePage {} },
        Step::Intro => rsx! { IntroPage {} },
        Step::Goals => rsx! { GoalsPage {} },
        Step::Beliefs => rsx! { BeliefsPage {} },
        Step::Affirmations => rsx! { AffirmationsPage {} },
        Step::VisionBoard => rsx! { VisionBoardPage {} },
        Step::Script => rsx! { ScriptPage {} },
        Step::Overview => rsx! { OverviewPage {} },
        Step::Plan => rsx! { PlanPage {} },
    }
}
