//! Everything the user has entered or generated during a session.

use crate::plan::PlanLinks;
use crate::template::Affirmations;
use crate::types::{GoalSelection, LimitingBelief};
use crate::vision::VisionBoard;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub goals: GoalSelection,
    pub belief: LimitingBelief,
    pub vision: VisionBoard,
    pub affirmations: Affirmations,
    pub script: String,
    pub plan_links: PlanLinks,
}

impl Answers {
    pub fn with_max_goals(max_goals: usize) -> Self {
        Self {
            goals: GoalSelection::with_max(max_goals),
            ..Default::default()
        }
    }
}
