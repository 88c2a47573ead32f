//! Named steps and the journey that orders them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::config::JourneyVariant;
use crate::validate::{validator_for, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Welcome,
    Intro,
    Goals,
    Beliefs,
    Affirmations,
    VisionBoard,
    Script,
    Overview,
    Plan,
}

impl Step {
    pub fn key(&self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::Intro => "intro",
            Step::Goals => "goals",
            Step::Beliefs => "beliefs",
            Step::Affirmations => "affirmations",
            Step::VisionBoard => "vision_board",
            Step::Script => "script",
            Step::Overview => "overview",
            Step::Plan => "plan",
        }
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            Step::Welcome => catalog::APP_TITLE,
            Step::Intro => "Welcome to ManifestMastery",
            Step::Goals => "Career Goals",
            Step::Beliefs => "Limiting Belief",
            Step::Affirmations => "Affirmations & Gratitude",
            Step::VisionBoard => "Vision Board",
            Step::Script => "Your Career Manifestation Script",
            Step::Overview => "Vision Board Overview",
            Step::Plan => "Your 30 Minutes Plan",
        }
    }

    pub fn instructions(&self) -> Option<&'static str> {
        match self {
            Step::Goals => Some(catalog::CAREER_GOALS_INSTRUCTIONS),
            Step::Beliefs => Some(catalog::LIMITING_BELIEFS_INSTRUCTIONS),
            Step::Affirmations => Some(catalog::AFFIRMATIONS_INSTRUCTIONS),
            Step::Script => Some(catalog::SCRIPT_INSTRUCTIONS),
            Step::Overview => Some(catalog::VISION_BOARD_INSTRUCTIONS),
            Step::Plan => Some(catalog::PLAN_INSTRUCTIONS),
            Step::Welcome | Step::Intro | Step::VisionBoard => None,
        }
    }

    /// Label of the button that leads *into* this step
    fn arrival_label(&self) -> &'static str {
        match self {
            Step::Welcome => "Back to Start",
            Step::Intro => "Get Started",
            Step::Goals => "Continue to Career Goals",
            Step::Beliefs => "Next: Limiting Beliefs",
            Step::Affirmations => "Next: Affirm & Be Grateful",
            Step::VisionBoard => "Next: Vision Board",
            Step::Script => "Generate Manifestation Script",
            Step::Overview => "View Overview",
            Step::Plan => "View 30 Minutes Plan",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Work done when a step is left successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEffect {
    GenerateAffirmations,
    GenerateScript,
}

/// One entry of a journey.
#[derive(Clone)]
pub struct StepDescriptor {
    pub step: Step,
    /// Label of the "continue" button, `None` on the last step
    pub continue_label: Option<&'static str>,
    /// Whether this step is shown on the progress bar
    pub tracked: bool,
    pub validator: Validator,
    pub on_leave: Option<StepEffect>,
}

impl fmt::Debug for StepDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDescriptor")
            .field("step", &self.step)
            .field("continue_label", &self.continue_label)
            .field("tracked", &self.tracked)
            .field("on_leave", &self.on_leave)
            .finish()
    }
}

/// Position on the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position among tracked steps
    pub position: usize,
    pub total: usize,
}

impl Progress {
    /// Fill percentage, 0..=100
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.position * 100 / self.total) as u32
    }
}

/// Ordered step sequence for one variant.
#[derive(Debug, Clone)]
pub struct Journey {
    variant: JourneyVariant,
    steps: Vec<StepDescriptor>,
}

impl Journey {
    pub fn new(variant: JourneyVariant) -> Self {
        let order: &[Step] = match variant {
            JourneyVariant::Extended => &[
                Step::Welcome,
                Step::Intro,
                Step::Goals,
                Step::Beliefs,
                Step::Affirmations,
                Step::VisionBoard,
                Step::Script,
                Step::Overview,
                Step::Plan,
            ],
            JourneyVariant::Compact => &[
                Step::Welcome,
                Step::Intro,
                Step::Goals,
                Step::Beliefs,
                Step::Affirmations,
                Step::VisionBoard,
                Step::Script,
                Step::Plan,
            ],
        };

        let steps = order
            .iter()
            .enumerate()
            .map(|(i, &step)| StepDescriptor {
                step,
                continue_label: order.get(i + 1).map(Step::arrival_label),
                tracked: !matches!(step, Step::Welcome | Step::Intro | Step::Plan),
                validator: validator_for(step),
                on_leave: match step {
                    Step::Goals => Some(StepEffect::GenerateAffirmations),
                    Step::VisionBoard => Some(StepEffect::GenerateScript),
                    _ => None,
                },
            })
            .collect();

        Self { variant, steps }
    }

    pub fn variant(&self) -> JourneyVariant {
        self.variant
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepDescriptor> {
        self.steps.get(index)
    }

    pub fn position(&self, step: Step) -> Option<usize> {
        self.steps.iter().position(|d| d.step == step)
    }

    pub fn contains(&self, step: Step) -> bool {
        self.position(step).is_some()
    }

    /// Progress-bar position of `step`, if it is a tracked step
    pub fn progress(&self, step: Step) -> Option<Progress> {
        let tracked: Vec<Step> = self
            .steps
            .iter()
            .filter(|d| d.tracked)
            .map(|d| d.step)
            .collect();
        let index = tracked.iter().position(|s| *s == step)?;
        Some(Progress {
            position: index + 1,
            total: tracked.len(),
        })
    }
}
