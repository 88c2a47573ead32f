//! Property-based tests for goal selection and navigation
//!
//! Uses proptest to check invariants over arbitrary action sequences.

use mastery_core::catalog::CAREER_GOALS;
use mastery_core::{GoalField, Step, Transition, Wizard};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Actions a user can take on the wizard
#[derive(Debug, Clone)]
enum Action {
    Toggle(usize),  // Index into the catalog
    Answer(usize),  // Index into the selection
    Advance,
    Retreat,
}

fn actions_strategy(max: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0..CAREER_GOALS.len()).prop_map(Action::Toggle),
            2 => (0..4usize).prop_map(Action::Answer),
            1 => Just(Action::Advance),
            1 => Just(Action::Retreat),
        ],
        0..max,
    )
}

fn apply(wizard: &mut Wizard, action: &Action) {
    match action {
        Action::Toggle(i) => {
            wizard.select_goal(CAREER_GOALS[*i]);
        }
        Action::Answer(i) => {
            for field in GoalField::ALL {
                let _ = wizard.set_goal_field(*i, field, "x");
            }
        }
        Action::Advance => {
            wizard.advance();
        }
        Action::Retreat => {
            wizard.retreat();
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Selection never exceeds three goals and never holds duplicates
    #[test]
    fn selection_bounded_and_unique(actions in actions_strategy(60)) {
        let mut wizard = Wizard::default();
        for action in &actions {
            apply(&mut wizard, action);
            let goals = wizard.answers().goals.goals();
            prop_assert!(goals.len() <= 3);
            let mut sorted = goals.to_vec();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), goals.len());
        }
    }

    /// Details exist only for selected goals
    #[test]
    fn details_follow_selection(actions in actions_strategy(60)) {
        let mut wizard = Wizard::default();
        for action in &actions {
            apply(&mut wizard, action);
        }
        for goal in CAREER_GOALS {
            if wizard.answers().goals.detail(goal).is_some() {
                prop_assert!(wizard.answers().goals.contains(goal));
            }
        }
    }

    /// Removing a goal keeps the relative order of the others
    #[test]
    fn removal_preserves_order(picks in prop::collection::vec(0..CAREER_GOALS.len(), 1..6), drop in 0..3usize) {
        let mut wizard = Wizard::default();
        for i in picks {
            wizard.select_goal(CAREER_GOALS[i]);
        }
        let before = wizard.answers().goals.goals().to_vec();
        if let Some(victim) = before.get(drop).cloned() {
            wizard.select_goal(&victim);
            let expected: Vec<String> = before.into_iter().filter(|g| *g != victim).collect();
            prop_assert_eq!(wizard.answers().goals.goals(), expected.as_slice());
        }
    }

    /// A blocked advance never moves the cursor and always leaves a message
    #[test]
    fn blocked_advance_stays_put(actions in actions_strategy(40)) {
        let mut wizard = Wizard::default();
        for action in &actions {
            let before = wizard.current_step();
            let is_advance = matches!(action, Action::Advance);
            apply(&mut wizard, action);
            if is_advance && wizard.current_step() == before && before != Step::Plan {
                prop_assert!(wizard.error().is_some());
            }
        }
    }

    /// Stepping back and forward again lands on the same step
    #[test]
    fn retreat_then_advance_returns(steps in 0..8usize) {
        let mut wizard = Wizard::default();
        for _ in 0..steps {
            if !matches!(wizard.advance(), Transition::Moved { .. }) {
                break;
            }
        }
        let here = wizard.current_step();
        if let Transition::Moved { .. } = wizard.retreat() {
            wizard.advance();
            prop_assert_eq!(wizard.current_step(), here);
        }
    }
}
