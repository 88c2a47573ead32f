//! Career goals: selection and per-goal detail records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::is_filled;

/// Default upper bound on simultaneously selected goals.
pub const DEFAULT_MAX_GOALS: usize = 3;

/// The five questions answered for every selected goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalField {
    WhatToAchieve,
    HowToKnow,
    IsRealistic,
    Importance,
    Timeline,
}

impl GoalField {
    /// All fields in the order they are asked.
    pub const ALL: [GoalField; 5] = [
        GoalField::WhatToAchieve,
        GoalField::HowToKnow,
        GoalField::IsRealistic,
        GoalField::Importance,
        GoalField::Timeline,
    ];

    /// Stable key, used for element ids and answer files
    pub fn key(&self) -> &'static str {
        match self {
            GoalField::WhatToAchieve => "what_to_achieve",
            GoalField::HowToKnow => "how_to_know",
            GoalField::IsRealistic => "is_realistic",
            GoalField::Importance => "importance",
            GoalField::Timeline => "timeline",
        }
    }

    /// The question shown to the user
    pub fn prompt(&self) -> &'static str {
        match self {
            GoalField::WhatToAchieve => "What exactly do you want to achieve?",
            GoalField::HowToKnow => "How will you know when you've achieved it?",
            GoalField::IsRealistic => "Is this goal realistic for you right now?",
            GoalField::Importance => "Why is this goal important to you?",
            GoalField::Timeline => "When do you want to achieve this goal?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            GoalField::WhatToAchieve => "Describe your goal in clear and simple terms.",
            GoalField::HowToKnow => {
                "What specific result or outcome will show that you've reached your goal?"
            }
            GoalField::IsRealistic => {
                "Do you have the time, resources, and ability to reach this goal?"
            }
            GoalField::Importance => {
                "What makes this goal meaningful and relevant to your current life or future plans?"
            }
            GoalField::Timeline => "Set a target date or time frame for achieving your goal.",
        }
    }

    /// Whether the answer is edited in a multi-line text area
    pub fn multiline(&self) -> bool {
        matches!(self, GoalField::Importance)
    }
}

/// Answers for one selected goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalDetail {
    pub goal: String,
    pub what_to_achieve: String,
    pub how_to_know: String,
    pub is_realistic: String,
    pub importance: String,
    pub timeline: String,
}

impl GoalDetail {
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: GoalField) -> &str {
        match field {
            GoalField::WhatToAchieve => &self.what_to_achieve,
            GoalField::HowToKnow => &self.how_to_know,
            GoalField::IsRealistic => &self.is_realistic,
            GoalField::Importance => &self.importance,
            GoalField::Timeline => &self.timeline,
        }
    }

    pub fn set(&mut self, field: GoalField, value: impl Into<String>) {
        let slot = match field {
            GoalField::WhatToAchieve => &mut self.what_to_achieve,
            GoalField::HowToKnow => &mut self.how_to_know,
            GoalField::IsRealistic => &mut self.is_realistic,
            GoalField::Importance => &mut self.importance,
            GoalField::Timeline => &mut self.timeline,
        };
        *slot = value.into();
    }

    /// True when all five answers are non-blank
    pub fn is_complete(&self) -> bool {
        GoalField::ALL.iter().all(|f| is_filled(self.get(*f)))
    }
}

/// Outcome of toggling a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
    /// The selection was full (or the name blank) and nothing changed
    Ignored,
}

/// Ordered set of selected goals with their detail records.
///
/// Details are keyed by goal name, so removing or reordering goals can never
/// attach answers to the wrong goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalSelection {
    goals: Vec<String>,
    details: HashMap<String, GoalDetail>,
    max: usize,
}

impl Default for GoalSelection {
    fn default() -> Self {
        Self::with_max(DEFAULT_MAX_GOALS)
    }
}

impl GoalSelection {
    pub fn with_max(max: usize) -> Self {
        Self {
            goals: Vec::new(),
            details: HashMap::new(),
            max,
        }
    }

    /// Add the goal if absent (and there is room), remove it if present.
    ///
    /// Removing a goal also drops its detail record.
    pub fn toggle(&mut self, name: &str) -> SelectionChange {
        if let Some(pos) = self.goals.iter().position(|g| g == name) {
            self.goals.remove(pos);
            self.details.remove(name);
            SelectionChange::Removed
        } else if !is_filled(name) || self.is_full() {
            SelectionChange::Ignored
        } else {
            self.goals.push(name.to_string());
            SelectionChange::Added
        }
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.goals.len() >= self.max
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, name: &str) -> bool {
        self.goals.iter().any(|g| g == name)
    }

    /// Goal name at a position in the selection order
    pub fn goal_at(&self, index: usize) -> Option<&str> {
        self.goals.get(index).map(String::as_str)
    }

    pub fn detail(&self, goal: &str) -> Option<&GoalDetail> {
        self.details.get(goal)
    }

    /// Write one answer, creating the detail record on first write.
    ///
    /// Returns false (and writes nothing) if the goal is not selected.
    pub fn set_field(&mut self, goal: &str, field: GoalField, value: impl Into<String>) -> bool {
        if !self.contains(goal) {
            return false;
        }
        self.details
            .entry(goal.to_string())
            .or_insert_with(|| GoalDetail::new(goal))
            .set(field, value);
        true
    }

    /// Selected goals paired with their (possibly missing) details, in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&GoalDetail>)> {
        self.goals
            .iter()
            .map(move |g| (g.as_str(), self.details.get(g)))
    }

    /// True when every selected goal has all five answers
    pub fn all_complete(&self) -> bool {
        self.iter()
            .all(|(_, detail)| detail.is_some_and(GoalDetail::is_complete))
    }
}
