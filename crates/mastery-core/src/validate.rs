//! Per-step validators.
//!
//! Each step maps to a pure function over the session answers. A failing
//! check carries the message shown to the user.

use crate::answers::Answers;
use crate::step::Step;
use crate::types::is_filled;

/// Result of checking whether the current step may be left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepCheck {
    Pass,
    Fail(String),
}

impl StepCheck {
    fn fail(reason: &str) -> Self {
        StepCheck::Fail(reason.to_string())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, StepCheck::Pass)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            StepCheck::Pass => None,
            StepCheck::Fail(reason) => Some(reason),
        }
    }
}

pub type Validator = fn(&Answers) -> StepCheck;

pub const NO_GOALS: &str = "Please select at least one goal.";
pub const GOALS_INCOMPLETE: &str = "Please answer all questions for each selected goal.";
pub const BELIEF_INCOMPLETE: &str = "Please fill in all fields about your limiting beliefs.";
pub const AFFIRMATIONS_MISSING: &str = "Please generate affirmations and gratitude statements.";
pub const IMAGES_MISSING: &str = "Please upload an image for each selected goal.";
pub const SCRIPT_MISSING: &str = "Please generate your manifestation script.";

pub fn validator_for(step: Step) -> Validator {
    match step {
        Step::Goals => goals,
        Step::Beliefs => beliefs,
        Step::Affirmations => affirmations,
        Step::VisionBoard => vision_board,
        Step::Script => script,
        Step::Welcome | Step::Intro | Step::Overview | Step::Plan => always,
    }
}

fn always(_: &Answers) -> StepCheck {
    StepCheck::Pass
}

pub fn goals(answers: &Answers) -> StepCheck {
    if answers.goals.is_empty() {
        StepCheck::fail(NO_GOALS)
    } else if !answers.goals.all_complete() {
        StepCheck::fail(GOALS_INCOMPLETE)
    } else {
        StepCheck::Pass
    }
}

pub fn beliefs(answers: &Answers) -> StepCheck {
    if answers.belief.is_complete() {
        StepCheck::Pass
    } else {
        StepCheck::fail(BELIEF_INCOMPLETE)
    }
}

pub fn affirmations(answers: &Answers) -> StepCheck {
    if answers.affirmations.is_generated() {
        StepCheck::Pass
    } else {
        StepCheck::fail(AFFIRMATIONS_MISSING)
    }
}

pub fn vision_board(answers: &Answers) -> StepCheck {
    if answers.vision.missing_for(answers.goals.goals()).is_empty() {
        StepCheck::Pass
    } else {
        StepCheck::fail(IMAGES_MISSING)
    }
}

pub fn script(answers: &Answers) -> StepCheck {
    if is_filled(&answers.script) {
        StepCheck::Pass
    } else {
        StepCheck::fail(SCRIPT_MISSING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{render_affirmations, TemplateTable};
    use crate::types::{BeliefField, GoalField};
    use crate::vision::{encode_image, fixtures::png_bytes};

    fn answers_with_goal(goal: &str) -> Answers {
        let mut answers = Answers::default();
        answers.goals.toggle(goal);
        answers
    }

    #[test]
    fn goals_requires_a_selection() {
        assert_eq!(goals(&Answers::default()).reason(), Some(NO_GOALS));
    }

    #[test]
    fn goals_requires_every_field() {
        let mut answers = answers_with_goal("Increase income");
        assert_eq!(goals(&answers).reason(), Some(GOALS_INCOMPLETE));

        for field in GoalField::ALL {
            answers.goals.set_field("Increase income", field, "yes");
        }
        assert!(goals(&answers).is_pass());
    }

    #[test]
    fn beliefs_requires_all_five() {
        let mut answers = Answers::default();
        for field in &BeliefField::ALL[..4] {
            answers.belief.set(*field, "something");
        }
        assert_eq!(beliefs(&answers).reason(), Some(BELIEF_INCOMPLETE));
        answers.belief.set(BeliefField::NewBelief, "I am capable");
        assert!(beliefs(&answers).is_pass());
    }

    #[test]
    fn affirmations_require_generation() {
        let mut answers = answers_with_goal("Find a new job");
        assert!(!affirmations(&answers).is_pass());
        answers.affirmations =
            render_affirmations(answers.goals.goals(), &TemplateTable::default());
        assert!(affirmations(&answers).is_pass());
    }

    #[test]
    fn vision_board_requires_image_per_goal() {
        let mut answers = answers_with_goal("Start a business");
        answers.goals.toggle("Switch careers");
        let image = encode_image(Some(&png_bytes())).unwrap();
        answers.vision.insert("Start a business", image.clone());
        // An image for an unselected goal does not count
        answers.vision.insert("Increase income", image.clone());
        assert_eq!(vision_board(&answers).reason(), Some(IMAGES_MISSING));

        answers.vision.insert("Switch careers", image);
        assert!(vision_board(&answers).is_pass());
    }

    #[test]
    fn script_must_not_be_blank() {
        let mut answers = Answers::default();
        answers.script = "  \n".to_string();
        assert_eq!(script(&answers).reason(), Some(SCRIPT_MISSING));
    }

    #[test]
    fn passive_steps_always_pass() {
        let answers = Answers::default();
        for step in [Step::Welcome, Step::Intro, Step::Overview, Step::Plan] {
            assert!(validator_for(step)(&answers).is_pass());
        }
    }
}
