//! Manifestation script page.

use dioxus::prelude::*;
use mastery_core::Step;
use mastery_ui::{Button, ButtonVariant};

use crate::components::{ContinueButton, StepHeading};
use crate::context::use_wizard;

#[component]
pub fn ScriptPage() -> Element {
    let mut wizard = use_wizard();
    let mut copy_status = use_signal(|| Option::<String>::None);
    let script = wizard.read().answers().script.clone();

    let copy_script = {
        let script = script.clone();
        move |_: ()| {
            let result = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(script.clone()));
            match result {
                Ok(()) => copy_status.set(Some("Copied to clipboard".to_string())),
                Err(e) => {
                    tracing::warn!("Clipboard unavailable: {}", e);
                    copy_status.set(Some(format!("Could not copy: {}", e)));
                }
            }
        }
    };

    rsx! {
        div { class: "step-page",
            StepHeading { step: Step::Script }

            div { class: "script-box",
                p { class: "script-text", "{script}" }
            }

            div { class: "button-row",
                Button { variant: ButtonVariant::Ghost, onclick: copy_script, "Copy script" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        wizard.write().generate_script();
                        copy_status.set(None);
                    },
                    "Regenerate"
                }
            }
            if let Some(status) = copy_status() {
                p { class: "input-hint", "{status}" }
            }

            ContinueButton {}
        }
    }
}
