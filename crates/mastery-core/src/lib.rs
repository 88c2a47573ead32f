//! Manifest Mastery Core Library
//!
//! Wizard state, validation and text templates for a guided career
//! manifestation questionnaire.
//!
//! ## Overview
//!
//! A session walks through a fixed sequence of named steps: the user picks up
//! to three career goals, answers five questions per goal, reflects on one
//! limiting belief, receives affirmation and gratitude statements, pins an
//! image to each goal on a vision board, and reads back a manifestation
//! script, an overview and a 30-minute daily practice plan.
//!
//! Everything lives in memory for the length of one session.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mastery_core::{GoalField, JourneyConfig, Step, Wizard};
//!
//! let mut wizard = Wizard::new(JourneyConfig::default());
//! wizard.advance(); // Welcome -> Intro
//! wizard.advance(); // Intro -> Goals
//!
//! wizard.select_goal("Get a promotion");
//! for field in GoalField::ALL {
//!     wizard.set_goal_field(0, field, "...")?;
//! }
//! wizard.advance();
//! assert_eq!(wizard.current_step(), Step::Beliefs);
//! ```

pub mod answers;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod overview;
pub mod plan;
pub mod step;
pub mod template;
pub mod types;
pub mod validate;
pub mod vision;
pub mod wizard;

// Re-exports
pub use answers::Answers;
pub use config::{JourneyConfig, JourneyVariant};
pub use error::{MasteryError, MasteryResult};
pub use overview::{Overview, OverviewCard};
pub use plan::{ActivityBody, PlanLink, PlanLinks, PlanSheet, PracticeActivity, PracticePlan};
pub use step::{Journey, Progress, Step, StepDescriptor, StepEffect};
pub use template::{Affirmations, TemplateTable};
pub use types::*;
pub use validate::StepCheck;
pub use vision::{encode_file, encode_image, VisionBoard};
pub use wizard::{Transition, Wizard};
