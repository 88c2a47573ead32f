//! End-to-end sessions through the wizard controller.

use image::{ImageFormat, Rgb, RgbImage};
use mastery_core::{
    ActivityBody, BeliefField, GoalField, JourneyConfig, JourneyVariant, SelectionChange, Step,
    StepCheck, Transition, Wizard,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn png(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Vec::new();
    RgbImage::from_pixel(width, height, Rgb([120, 40, 200]))
        .write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    buffer
}

/// Advance from Welcome to Goals
fn to_goals(wizard: &mut Wizard) {
    assert!(matches!(wizard.advance(), Transition::Moved { .. }));
    assert!(matches!(wizard.advance(), Transition::Moved { .. }));
    assert_eq!(wizard.current_step(), Step::Goals);
}

fn answer_goals(wizard: &mut Wizard) {
    for index in 0..wizard.answers().goals.len() {
        for field in GoalField::ALL {
            wizard
                .set_goal_field(index, field, format!("{} answer", field.key()))
                .unwrap();
        }
    }
}

fn answer_belief(wizard: &mut Wizard) {
    wizard.set_belief_field(BeliefField::Fear, "I fear being judged");
    wizard.set_belief_field(BeliefField::TriggeringSituation, "Presenting to leadership");
    wizard.set_belief_field(BeliefField::AdviceToFriend, "You know this material");
    wizard.set_belief_field(BeliefField::SmallStep, "Practice in front of a friend");
    wizard.set_belief_field(BeliefField::NewBelief, "I am capable and confident");
}

fn upload_all(wizard: &mut Wizard) {
    let goals = wizard.answers().goals.goals().to_vec();
    for goal in goals {
        wizard.upload_vision_image(&goal, Some(&png(6, 4))).unwrap();
    }
}

// ============================================================================
// Full Sessions
// ============================================================================

#[test]
fn extended_session_reaches_plan() {
    let mut wizard = Wizard::new(JourneyConfig::default().with_board_year(2024));
    to_goals(&mut wizard);

    wizard.select_goal("Get a promotion");
    wizard.select_goal("Switch careers");
    answer_goals(&mut wizard);
    wizard.advance();
    assert_eq!(wizard.current_step(), Step::Beliefs);

    answer_belief(&mut wizard);
    wizard.advance();
    assert_eq!(wizard.current_step(), Step::Affirmations);
    assert_eq!(wizard.answers().affirmations.gratitude.len(), 2);

    wizard.advance();
    assert_eq!(wizard.current_step(), Step::VisionBoard);
    upload_all(&mut wizard);
    wizard.advance();
    assert_eq!(wizard.current_step(), Step::Script);
    assert!(wizard
        .answers()
        .script
        .contains("committed to Get a promotion, Switch careers"));

    wizard.advance();
    assert_eq!(wizard.current_step(), Step::Overview);
    let overview = wizard.overview();
    assert_eq!(overview.cards.len(), 2);
    assert!(overview.cards.iter().all(|c| c.image.is_some()));
    assert!(overview
        .cards
        .iter()
        .all(|c| c.limiting_belief == "I fear being judged"));

    wizard.advance();
    assert_eq!(wizard.current_step(), Step::Plan);
    assert!(wizard.is_last());
    assert!(wizard.error().is_none());

    let plan = wizard.practice_plan();
    assert_eq!(plan.total_minutes(), 30);
    match &plan.activities.last().unwrap().body {
        ActivityBody::Images(images) => assert_eq!(images.len(), 2),
        other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn compact_session_has_no_overview() {
    let config = JourneyConfig::default().with_variant(JourneyVariant::Compact);
    let mut wizard = Wizard::new(config);
    to_goals(&mut wizard);

    wizard.select_goal("Start a business");
    answer_goals(&mut wizard);
    wizard.advance();
    answer_belief(&mut wizard);
    wizard.advance();
    wizard.advance();
    upload_all(&mut wizard);
    wizard.advance();
    assert_eq!(wizard.current_step(), Step::Script);
    assert_eq!(
        wizard.advance(),
        Transition::Moved {
            from: Step::Script,
            to: Step::Plan
        }
    );

    let sheet = wizard.plan_sheet();
    assert_eq!(sheet.goal_statement.as_deref(), Some("what_to_achieve answer"));
    assert!(sheet.vision_image.is_some());
}

// ============================================================================
// Validation Gates
// ============================================================================

#[test]
fn goals_need_answers_for_every_goal() {
    let mut wizard = Wizard::default();
    to_goals(&mut wizard);
    wizard.select_goal("Get a promotion");
    wizard.select_goal("Increase income");
    for field in GoalField::ALL {
        wizard.set_goal_field(0, field, "done").unwrap();
    }

    assert!(matches!(wizard.advance(), Transition::Blocked { .. }));
    assert_eq!(
        wizard.error(),
        Some("Please answer all questions for each selected goal.")
    );

    // Dropping the unanswered goal unblocks the step
    wizard.select_goal("Increase income");
    assert!(matches!(wizard.advance(), Transition::Moved { .. }));
}

#[test]
fn vision_board_needs_image_per_goal() {
    let mut wizard = Wizard::default();
    to_goals(&mut wizard);
    wizard.select_goal("Find a new job");
    wizard.select_goal("Develop new skills");
    answer_goals(&mut wizard);
    wizard.advance();
    answer_belief(&mut wizard);
    wizard.advance();
    wizard.advance();

    wizard
        .upload_vision_image("Find a new job", Some(&png(2, 2)))
        .unwrap();
    assert_eq!(
        wizard.validate_step(),
        StepCheck::Fail("Please upload an image for each selected goal.".to_string())
    );
    assert!(matches!(wizard.advance(), Transition::Blocked { .. }));

    wizard
        .upload_vision_image("Develop new skills", Some(&png(2, 2)))
        .unwrap();
    assert!(wizard.validate_step().is_pass());
}

#[test]
fn going_back_and_changing_goals_regenerates_text() {
    let mut wizard = Wizard::default();
    to_goals(&mut wizard);
    wizard.select_goal("Get a promotion");
    answer_goals(&mut wizard);
    wizard.advance();

    wizard.retreat();
    assert_eq!(wizard.current_step(), Step::Goals);
    wizard.select_goal("Get a promotion");
    wizard.select_goal("Improve job satisfaction");
    answer_goals(&mut wizard);
    wizard.advance();

    assert_eq!(
        wizard.answers().affirmations.affirmations,
        vec!["I am confident in my ability to improve job satisfaction.".to_string()]
    );
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn fourth_goal_is_ignored() {
    let mut wizard = Wizard::default();
    for goal in ["Get a promotion", "Switch careers", "Start a business"] {
        assert_eq!(wizard.select_goal(goal), SelectionChange::Added);
    }
    assert_eq!(
        wizard.select_goal("Increase income"),
        SelectionChange::Ignored
    );
    assert_eq!(wizard.answers().goals.len(), 3);
}

#[test]
fn upload_overwrites_same_goal() {
    let mut wizard = Wizard::default();
    wizard
        .upload_vision_image("Start a business", Some(&png(3, 3)))
        .unwrap();
    wizard
        .upload_vision_image("Start a business", Some(&png(5, 7)))
        .unwrap();

    let board = &wizard.answers().vision;
    assert_eq!(board.len(), 1);
    let image = board.get("Start a business").unwrap();
    assert!(!image.data_uri.is_empty());
    assert_eq!((image.width, image.height), (5, 7));
}

#[test]
fn missing_upload_is_invalid_file() {
    let mut wizard = Wizard::default();
    let err = wizard.upload_vision_image("Start a business", None).unwrap_err();
    assert!(matches!(err, mastery_core::MasteryError::InvalidFile(_)));
    assert!(wizard.answers().vision.is_empty());
}
