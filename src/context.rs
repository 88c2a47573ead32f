//! Wizard context for Manifest Mastery.
//!
//! The session's [`Wizard`] lives in one signal created by `App`. Pages read
//! it to render and write to it from event handlers; every write re-renders
//! the readers.
//!
//! ```ignore
//! let mut wizard = use_wizard();
//! let step = wizard.read().current_step();
//! rsx! { button { onclick: move |_| { wizard.write().advance(); }, "Next" } }
//! ```

use dioxus::prelude::*;
use mastery_core::Wizard;

/// Hook to access the session wizard from context.
pub fn use_wizard() -> Signal<Wizard> {
    use_context::<Signal<Wizard>>()
}
