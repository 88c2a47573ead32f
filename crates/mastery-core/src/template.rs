//! Fixed-text "generation" of affirmations, gratitude and the script.
//!
//! Content lives in a [`TemplateTable`]; rendering is a pure function of the
//! selected goals and the table. `{goal}` is replaced by one lower-cased goal,
//! `{goals}` by the comma-joined goal list as the user selected it.

use serde::{Deserialize, Serialize};

pub const GOAL_PLACEHOLDER: &str = "{goal}";
pub const GOALS_PLACEHOLDER: &str = "{goals}";

const DEFAULT_AFFIRMATION: &str = "I am confident in my ability to {goal}.";
const DEFAULT_GRATITUDE: &str = "I am grateful for the opportunity to {goal}.";
const DEFAULT_SCRIPT: &str = "I am doing work that I love, and I am recognized for my talents.
My career is growing, and I am open to new opportunities and success.
I am committed to {goals}, and I feel excited knowing I am creating the career of my dreams.
I am confident in my abilities, and I know that I am on the path to achieving my career goals.";

/// Template strings for every generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateTable {
    pub affirmation: String,
    pub gratitude: String,
    pub script: String,
}

impl Default for TemplateTable {
    fn default() -> Self {
        Self {
            affirmation: DEFAULT_AFFIRMATION.to_string(),
            gratitude: DEFAULT_GRATITUDE.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
        }
    }
}

/// One affirmation and one gratitude statement per selected goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affirmations {
    pub affirmations: Vec<String>,
    pub gratitude: Vec<String>,
}

impl Affirmations {
    /// Both lists have at least one entry
    pub fn is_generated(&self) -> bool {
        !self.affirmations.is_empty() && !self.gratitude.is_empty()
    }
}

pub fn render_affirmations(goals: &[String], table: &TemplateTable) -> Affirmations {
    let fill = |template: &str| -> Vec<String> {
        goals
            .iter()
            .map(|goal| template.replace(GOAL_PLACEHOLDER, &goal.to_lowercase()))
            .collect()
    };
    Affirmations {
        affirmations: fill(&table.affirmation),
        gratitude: fill(&table.gratitude),
    }
}

pub fn render_script(goals: &[String], table: &TemplateTable) -> String {
    table.script.replace(GOALS_PLACEHOLDER, &goals.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goals(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn affirmation_lowercases_goal() {
        let out = render_affirmations(&goals(&["Get a promotion"]), &TemplateTable::default());
        assert_eq!(
            out.affirmations,
            vec!["I am confident in my ability to get a promotion.".to_string()]
        );
        assert_eq!(
            out.gratitude,
            vec!["I am grateful for the opportunity to get a promotion.".to_string()]
        );
    }

    #[test]
    fn one_sentence_per_goal_in_order() {
        let out = render_affirmations(
            &goals(&["Switch careers", "Increase income"]),
            &TemplateTable::default(),
        );
        assert_eq!(out.affirmations.len(), 2);
        assert!(out.affirmations[0].ends_with("switch careers."));
        assert!(out.gratitude[1].ends_with("increase income."));
    }

    #[test]
    fn no_goals_renders_nothing() {
        let out = render_affirmations(&[], &TemplateTable::default());
        assert!(!out.is_generated());
    }

    #[test]
    fn script_keeps_goal_case_and_order() {
        let script = render_script(
            &goals(&["Get a promotion", "Switch careers"]),
            &TemplateTable::default(),
        );
        assert!(script.contains("committed to Get a promotion, Switch careers"));
        assert_eq!(script.lines().count(), 4);
    }

    #[test]
    fn custom_table_is_used() {
        let table = TemplateTable {
            affirmation: "I will {goal}!".to_string(),
            gratitude: "Thanks for {goal}".to_string(),
            script: "Goals: {goals}".to_string(),
        };
        let g = goals(&["Find a new job"]);
        assert_eq!(render_affirmations(&g, &table).affirmations[0], "I will find a new job!");
        assert_eq!(render_script(&g, &table), "Goals: Find a new job");
    }
}
