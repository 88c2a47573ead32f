//! The limiting-belief reflection record.

use serde::{Deserialize, Serialize};

use super::is_filled;

/// The five questions of the limiting-belief reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeliefField {
    Fear,
    TriggeringSituation,
    AdviceToFriend,
    SmallStep,
    NewBelief,
}

impl BeliefField {
    pub const ALL: [BeliefField; 5] = [
        BeliefField::Fear,
        BeliefField::TriggeringSituation,
        BeliefField::AdviceToFriend,
        BeliefField::SmallStep,
        BeliefField::NewBelief,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BeliefField::Fear => "fear",
            BeliefField::TriggeringSituation => "triggering_situation",
            BeliefField::AdviceToFriend => "advice_to_friend",
            BeliefField::SmallStep => "small_step",
            BeliefField::NewBelief => "new_belief",
        }
    }

    /// Heading of the reflection stage this field belongs to
    pub fn stage(&self) -> &'static str {
        match self {
            BeliefField::Fear | BeliefField::TriggeringSituation => {
                "Step 1: Identify Your Fears and Doubts"
            }
            BeliefField::AdviceToFriend => "Step 1.2: Challenge Your Fears and Doubts",
            BeliefField::SmallStep => "Step 2: Take Action to Remove Fear",
            BeliefField::NewBelief => "Step 3: Practice Self-Love",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            BeliefField::Fear => "What fear is holding me back?",
            BeliefField::TriggeringSituation => "When does this fear show up?",
            BeliefField::AdviceToFriend => "What advice would I give to a friend?",
            BeliefField::SmallStep => {
                "What is one small step I can take today to confront this fear?"
            }
            BeliefField::NewBelief => {
                "What positive affirmation can I use to replace this fear?"
            }
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            BeliefField::Fear => "I fear ____________________.",
            BeliefField::TriggeringSituation => "I feel this way when ____________________.",
            BeliefField::AdviceToFriend => {
                "If my friend felt this way, I would say ____________________."
            }
            BeliefField::SmallStep => "Today, I will ____________________ to confront my fear.",
            BeliefField::NewBelief => {
                "I will replace my fear with the belief that ____________________."
            }
        }
    }

    /// Worked example shown under the prompt, where there is one
    pub fn example(&self) -> Option<&'static str> {
        match self {
            BeliefField::SmallStep => Some("I'll practice in front of a friend."),
            BeliefField::NewBelief => Some("I am capable and confident."),
            _ => None,
        }
    }

    pub fn multiline(&self) -> bool {
        matches!(self, BeliefField::AdviceToFriend)
    }
}

/// One limiting belief per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitingBelief {
    pub fear: String,
    pub triggering_situation: String,
    pub advice_to_friend: String,
    pub small_step: String,
    pub new_belief: String,
}

impl LimitingBelief {
    pub fn get(&self, field: BeliefField) -> &str {
        match field {
            BeliefField::Fear => &self.fear,
            BeliefField::TriggeringSituation => &self.triggering_situation,
            BeliefField::AdviceToFriend => &self.advice_to_friend,
            BeliefField::SmallStep => &self.small_step,
            BeliefField::NewBelief => &self.new_belief,
        }
    }

    pub fn set(&mut self, field: BeliefField, value: impl Into<String>) {
        let slot = match field {
            BeliefField::Fear => &mut self.fear,
            BeliefField::TriggeringSituation => &mut self.triggering_situation,
            BeliefField::AdviceToFriend => &mut self.advice_to_friend,
            BeliefField::SmallStep => &mut self.small_step,
            BeliefField::NewBelief => &mut self.new_belief,
        };
        *slot = value.into();
    }

    /// Fields still blank, in asking order
    pub fn missing(&self) -> Vec<BeliefField> {
        BeliefField::ALL
            .into_iter()
            .filter(|f| !is_filled(self.get(*f)))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}
