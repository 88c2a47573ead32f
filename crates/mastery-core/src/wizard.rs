//! The wizard controller.
//!
//! Holds the current step and every answer. Moving forward is gated by the
//! current step's validator; moving back is always allowed. A failed check
//! becomes the single error message, cleared by the next successful move.

use tracing::{debug, info, warn};

use crate::answers::Answers;
use crate::config::JourneyConfig;
use crate::error::{MasteryError, MasteryResult};
use crate::overview::Overview;
use crate::plan::{PlanLink, PlanSheet, PracticePlan};
use crate::step::{Journey, Progress, Step, StepDescriptor, StepEffect};
use crate::template::{render_affirmations, render_script};
use crate::types::{BeliefField, GoalField, SelectionChange, VisionImage};
use crate::validate::StepCheck;
use crate::vision::encode_image;

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved { from: Step, to: Step },
    /// Validation failed; the reason is also stored as the wizard error
    Blocked { step: Step, reason: String },
    /// Already at the first (retreat) or last (advance) step
    Stayed(Step),
}

#[derive(Debug, Clone)]
pub struct Wizard {
    config: JourneyConfig,
    journey: Journey,
    cursor: usize,
    answers: Answers,
    error: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(JourneyConfig::default())
    }
}

impl Wizard {
    pub fn new(config: JourneyConfig) -> Self {
        let journey = Journey::new(config.variant);
        let answers = Answers::with_max_goals(config.max_goals);
        Self {
            config,
            journey,
            cursor: 0,
            answers,
            error: None,
        }
    }

    pub fn config(&self) -> &JourneyConfig {
        &self.config
    }

    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn descriptor(&self) -> &StepDescriptor {
        &self.journey.steps()[self.cursor]
    }

    pub fn current_step(&self) -> Step {
        self.descriptor().step
    }

    /// 1-based position in the journey, for display
    pub fn step_number(&self) -> usize {
        self.cursor + 1
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.journey.len()
    }

    pub fn progress(&self) -> Option<Progress> {
        self.journey.progress(self.current_step())
    }

    // ------------------------------------------------------------------
    // Answers
    // ------------------------------------------------------------------

    /// Toggle a goal in the selection.
    ///
    /// Deselecting drops the goal's answers and vision image. Selecting past
    /// the limit is ignored.
    pub fn select_goal(&mut self, name: &str) -> SelectionChange {
        let change = self.answers.goals.toggle(name);
        match change {
            SelectionChange::Added => info!(goal = name, "Goal selected"),
            SelectionChange::Removed => {
                self.answers.vision.remove(name);
                info!(goal = name, "Goal deselected");
            }
            SelectionChange::Ignored => debug!(
                goal = name,
                selected = self.answers.goals.len(),
                "Goal selection ignored"
            ),
        }
        change
    }

    /// Answer a question for the goal at `index` in selection order.
    pub fn set_goal_field(
        &mut self,
        index: usize,
        field: GoalField,
        value: impl Into<String>,
    ) -> MasteryResult<()> {
        let goal = self
            .answers
            .goals
            .goal_at(index)
            .map(str::to_string)
            .ok_or(MasteryError::GoalIndexOutOfRange {
                index,
                selected: self.answers.goals.len(),
            })?;
        self.set_goal_field_for(&goal, field, value)
    }

    pub fn set_goal_field_for(
        &mut self,
        goal: &str,
        field: GoalField,
        value: impl Into<String>,
    ) -> MasteryResult<()> {
        if self.answers.goals.set_field(goal, field, value) {
            debug!(goal, field = field.key(), "Goal answer updated");
            Ok(())
        } else {
            Err(MasteryError::GoalNotSelected(goal.to_string()))
        }
    }

    pub fn set_belief_field(&mut self, field: BeliefField, value: impl Into<String>) {
        self.answers.belief.set(field, value);
        debug!(field = field.key(), "Belief answer updated");
    }

    pub fn set_plan_link(&mut self, link: PlanLink, value: impl Into<String>) {
        self.answers.plan_links.set(link, value);
    }

    /// Decode an uploaded file and pin it to `goal`, replacing any earlier
    /// image. `None` means no file was chosen.
    pub fn upload_vision_image(&mut self, goal: &str, file: Option<&[u8]>) -> MasteryResult<()> {
        match encode_image(file) {
            Ok(image) => {
                self.store_vision_image(goal, image);
                Ok(())
            }
            Err(e) => {
                warn!(goal, error = %e, "Vision image rejected");
                Err(e)
            }
        }
    }

    /// Store an image decoded elsewhere (e.g. on a background task).
    pub fn store_vision_image(&mut self, goal: &str, image: VisionImage) {
        info!(
            goal,
            format = image.format.mime(),
            bytes = image.payload_len(),
            width = image.width,
            height = image.height,
            "Vision image stored"
        );
        self.answers.vision.insert(goal, image);
    }

    pub fn generate_affirmations(&mut self) {
        self.answers.affirmations =
            render_affirmations(self.answers.goals.goals(), &self.config.templates);
        debug!(
            count = self.answers.affirmations.affirmations.len(),
            "Affirmations generated"
        );
    }

    pub fn generate_script(&mut self) {
        self.answers.script = render_script(self.answers.goals.goals(), &self.config.templates);
        debug!("Manifestation script generated");
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn validate_step(&self) -> StepCheck {
        (self.descriptor().validator)(&self.answers)
    }

    /// Move to the next step if the current one validates.
    pub fn advance(&mut self) -> Transition {
        let from = self.current_step();
        if self.is_last() {
            return Transition::Stayed(from);
        }

        if let StepCheck::Fail(reason) = self.validate_step() {
            info!(step = from.key(), %reason, "Advance blocked");
            self.error = Some(reason.clone());
            return Transition::Blocked { step: from, reason };
        }

        if let Some(effect) = self.descriptor().on_leave {
            self.apply(effect);
        }

        self.cursor += 1;
        self.error = None;
        let to = self.current_step();
        info!(from = from.key(), to = to.key(), "Advanced");
        Transition::Moved { from, to }
    }

    /// Move to the previous step. Never validated.
    pub fn retreat(&mut self) -> Transition {
        let from = self.current_step();
        if self.is_first() {
            return Transition::Stayed(from);
        }
        self.cursor -= 1;
        self.error = None;
        let to = self.current_step();
        info!(from = from.key(), to = to.key(), "Retreated");
        Transition::Moved { from, to }
    }

    fn apply(&mut self, effect: StepEffect) {
        match effect {
            StepEffect::GenerateAffirmations => self.generate_affirmations(),
            StepEffect::GenerateScript => self.generate_script(),
        }
    }

    // ------------------------------------------------------------------
    // Summaries
    // ------------------------------------------------------------------

    pub fn overview(&self) -> Overview {
        Overview::from_answers(&self.answers)
    }

    pub fn practice_plan(&self) -> PracticePlan {
        PracticePlan::from_answers(&self.answers)
    }

    pub fn plan_sheet(&self) -> PlanSheet {
        PlanSheet::from_answers(&self.answers)
    }
}
