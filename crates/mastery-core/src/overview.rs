//! Per-goal summary cards shown before the plan.

use crate::answers::Answers;
use crate::types::VisionImage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewCard {
    pub goal: String,
    pub image: Option<VisionImage>,
    /// The goal's "what exactly do you want to achieve" answer
    pub goal_statement: String,
    /// The session's limiting belief (same on every card)
    pub limiting_belief: String,
    pub affirmation: Option<String>,
    pub gratitude: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub cards: Vec<OverviewCard>,
    pub script: String,
}

impl Overview {
    pub fn from_answers(answers: &Answers) -> Self {
        let cards = answers
            .goals
            .iter()
            .enumerate()
            .map(|(i, (goal, detail))| OverviewCard {
                goal: goal.to_string(),
                image: answers.vision.get(goal).cloned(),
                goal_statement: detail
                    .map(|d| d.what_to_achieve.clone())
                    .unwrap_or_default(),
                limiting_belief: answers.belief.fear.clone(),
                affirmation: answers.affirmations.affirmations.get(i).cloned(),
                gratitude: answers.affirmations.gratitude.get(i).cloned(),
            })
            .collect();

        Self {
            cards,
            script: answers.script.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{render_affirmations, TemplateTable};
    use crate::types::GoalField;

    #[test]
    fn one_card_per_goal() {
        let mut answers = Answers::default();
        answers.goals.toggle("Switch careers");
        answers.goals.toggle("Develop new skills");
        answers
            .goals
            .set_field("Develop new skills", GoalField::WhatToAchieve, "Learn Rust");
        answers.belief.fear = "Failure".to_string();
        answers.affirmations = render_affirmations(answers.goals.goals(), &TemplateTable::default());

        let overview = Overview::from_answers(&answers);
        assert_eq!(overview.cards.len(), 2);
        assert_eq!(overview.cards[0].goal, "Switch careers");
        assert_eq!(overview.cards[0].goal_statement, "");
        assert_eq!(overview.cards[1].goal_statement, "Learn Rust");
        assert_eq!(overview.cards[1].limiting_belief, "Failure");
        assert_eq!(
            overview.cards[1].gratitude.as_deref(),
            Some("I am grateful for the opportunity to develop new skills.")
        );
    }

    #[test]
    fn ungenerated_statements_stay_empty() {
        let mut answers = Answers::default();
        answers.goals.toggle("Find a new job");
        let overview = Overview::from_answers(&answers);
        assert!(overview.cards[0].affirmation.is_none());
    }
}
