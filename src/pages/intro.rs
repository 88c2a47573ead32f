//! Intro page - what the journey covers.

use dioxus::prelude::*;
use mastery_core::Step;

use crate::components::ContinueButton;
use crate::context::use_wizard;

#[component]
pub fn IntroPage() -> Element {
    let paragraphs = use_wizard().read().config().variant.intro();
    let title = Step::Intro.title();

    rsx! {
        section { class: "intro card",
            div { class: "logo-mark", "\u{2726}" }
            h2 { class: "section-header centered", "{title}" }
            for text in paragraphs.iter() {
                p { class: "body-text centered", "{text}" }
            }
            ContinueButton {}
        }
    }
}
