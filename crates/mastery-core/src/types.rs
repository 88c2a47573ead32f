//! Core types for Manifest Mastery

mod belief;
mod goal;
mod image;

pub use belief::{BeliefField, LimitingBelief};
pub use goal::{GoalDetail, GoalField, GoalSelection, SelectionChange, DEFAULT_MAX_GOALS};
pub use image::{VisionImage, VisionImageFormat};

/// Whether a free-text answer counts as filled in.
pub(crate) fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
