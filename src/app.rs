use dioxus::prelude::*;
use mastery_core::Wizard;

use crate::components::WizardShell;
use crate::journey_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the session's wizard and provides it to every page.
#[component]
pub fn App() -> Element {
    let wizard = use_signal(|| Wizard::new(journey_config()));
    use_context_provider(|| wizard);

    rsx! {
        style { {GLOBAL_STYLES} }
        WizardShell {}
    }
}
