//! App-specific components.

mod continue_button;
mod goal_questions;
mod shell;
mod step_heading;
mod vision_upload;

pub use continue_button::ContinueButton;
pub use goal_questions::GoalQuestions;
pub use shell::WizardShell;
pub use step_heading::StepHeading;
pub use vision_upload::VisionUpload;
