//! Welcome page - the first screen.

use dioxus::prelude::*;
use mastery_core::catalog::{APP_TITLE, WELCOME_HEADLINE, WELCOME_SUBLINE};

use crate::components::ContinueButton;

#[component]
pub fn WelcomePage() -> Element {
    rsx! {
        section { class: "welcome card",
            div { class: "logo-mark", "\u{2726}" }
            h1 { class: "page-title", "{APP_TITLE}" }
            h2 { class: "welcome-headline", "{WELCOME_HEADLINE}" }
            p { class: "body-text muted", "{WELCOME_SUBLINE}" }
            ContinueButton {}
        }
    }
}
