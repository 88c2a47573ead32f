//! Manifest Mastery UI Components
//!
//! Dioxus widgets for the questionnaire pages: gradient buttons, labelled
//! inputs, collapsible prompts, choice pills, a progress bar and alerts.
//!
//! ## Palette
//!
//! - **Purple (#9333ea)**: titles, headings
//! - **Pink (#ec4899)**: progress fill, gradient end
//! - **Danger (#dc2626)**: validation alerts
//!
//! Class names match `GLOBAL_STYLES` in the desktop app.

pub mod components;

pub use components::*;
