//! Error types for Manifest Mastery

use thiserror::Error;

/// Main error type for Manifest Mastery operations.
///
/// Step validation failures are not errors; they surface as
/// [`crate::StepCheck::Fail`] and end up as the wizard's error message.
#[derive(Error, Debug)]
pub enum MasteryError {
    /// No file was supplied, or the file could not be decoded as an image
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// A goal index outside the selected-goal list
    #[error("Goal index {index} out of range ({selected} goals selected)")]
    GoalIndexOutOfRange { index: usize, selected: usize },

    /// A goal-keyed write for a goal that is not selected
    #[error("Goal not selected: {0}")]
    GoalNotSelected(String),

    /// Configuration could not be parsed or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MasteryError
pub type MasteryResult<T> = Result<T, MasteryError>;
