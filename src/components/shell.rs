//! Wizard frame: header, progress, error alert, the current page, and the
//! Previous / Next footer.

use dioxus::prelude::*;
use mastery_core::catalog::{APP_TAGLINE, APP_TITLE};
use mastery_ui::{Alert, Button, ButtonVariant, ProgressBar};

use crate::context::use_wizard;
use crate::pages::StepView;

#[component]
pub fn WizardShell() -> Element {
    let mut wizard = use_wizard();

    let (progress, error, is_first, is_last) = {
        let w = wizard.read();
        (
            w.progress(),
            w.error().map(str::to_string),
            w.is_first(),
            w.is_last(),
        )
    };

    rsx! {
        main { class: "wizard",
            header { class: "wizard-header",
                h1 { class: "app-title", "{APP_TITLE}" }
                p { class: "tagline", "{APP_TAGLINE}" }
            }

            if let Some(p) = progress {
                ProgressBar { position: p.position, total: p.total, percent: p.percent() }
            }

            if let Some(message) = error {
                Alert { message }
            }

            div { class: "wizard-body", StepView {} }

            footer { class: "wizard-footer",
                if !is_first {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            wizard.write().retreat();
                        },
                        "Previous"
                    }
                }
                // The welcome page has its own call to action
                if !is_first && !is_last {
                    Button {
                        onclick: move |_| {
                            wizard.write().advance();
                        },
                        "Next"
                    }
                }
            }
        }
    }
}
