//! The 30-minute daily practice built from a finished session.

use serde::{Deserialize, Serialize};

use crate::answers::Answers;
use crate::types::VisionImage;

/// The Ho'oponopono mantra, one line per phrase
pub const HOOPONOPONO_MANTRA: [&str; 4] = [
    "I'm Sorry.",
    "Please forgive me.",
    "Thank you.",
    "I love you.",
];

/// Single-line form used on the dashboard sheet
pub const HOOPONOPONO_LINE: &str = "I am Sorry. Please Forgive. Thank you. I Love you.";

/// Practice links the user may paste on the plan sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanLinks {
    pub breathing: String,
    pub silence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanLink {
    Breathing,
    Silence,
}

impl PlanLink {
    pub fn label(&self) -> &'static str {
        match self {
            PlanLink::Breathing => "Breathing - 10 Minutes",
            PlanLink::Silence => "Silence - 10 Minutes",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PlanLink::Breathing => "YouTube Link: Breathing",
            PlanLink::Silence => "YouTube Link: Silence",
        }
    }
}

impl PlanLinks {
    pub fn get(&self, link: PlanLink) -> &str {
        match link {
            PlanLink::Breathing => &self.breathing,
            PlanLink::Silence => &self.silence,
        }
    }

    pub fn set(&mut self, link: PlanLink, value: impl Into<String>) {
        match link {
            PlanLink::Breathing => self.breathing = value.into(),
            PlanLink::Silence => self.silence = value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityBody {
    Guidance(&'static str),
    Mantra(Vec<&'static str>),
    Text(String),
    /// Vision images of the selected goals, in selection order
    Images(Vec<(String, VisionImage)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeActivity {
    pub name: &'static str,
    pub minutes: u32,
    pub body: ActivityBody,
}

/// Checklist form of the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticePlan {
    pub activities: Vec<PracticeActivity>,
}

impl PracticePlan {
    pub fn from_answers(answers: &Answers) -> Self {
        let images = answers
            .goals
            .goals()
            .iter()
            .filter_map(|goal| {
                answers
                    .vision
                    .get(goal)
                    .map(|img| (goal.clone(), img.clone()))
            })
            .collect();

        let activities = vec![
            PracticeActivity {
                name: "Breathing",
                minutes: 10,
                body: ActivityBody::Guidance(
                    "Practice: Utilize the Wim Hof Breathing technique to enhance your focus and calm your mind.",
                ),
            },
            PracticeActivity {
                name: "Silence",
                minutes: 10,
                body: ActivityBody::Guidance(
                    "Action: Set a silence timer for 10 minutes to allow for deep reflection and mindfulness.",
                ),
            },
            PracticeActivity {
                name: "Ho'oponopono",
                minutes: 2,
                body: ActivityBody::Mantra(HOOPONOPONO_MANTRA.to_vec()),
            },
            PracticeActivity {
                name: "Gratitude",
                minutes: 2,
                body: ActivityBody::Text(answers.affirmations.gratitude.join(", ")),
            },
            PracticeActivity {
                name: "Affirmations",
                minutes: 2,
                body: ActivityBody::Text(answers.affirmations.affirmations.join(", ")),
            },
            PracticeActivity {
                name: "Read Your Life Script",
                minutes: 2,
                body: ActivityBody::Text(answers.script.clone()),
            },
            PracticeActivity {
                name: "Visualize Your Goals",
                minutes: 2,
                body: ActivityBody::Images(images),
            },
        ];

        Self { activities }
    }

    pub fn total_minutes(&self) -> u32 {
        self.activities.iter().map(|a| a.minutes).sum()
    }
}

/// Dashboard form of the plan: first entries of each section on one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSheet {
    pub links: PlanLinks,
    /// Most recently uploaded vision image
    pub vision_image: Option<VisionImage>,
    pub goal_statement: Option<String>,
    pub fear: String,
    pub hooponopono: &'static str,
    pub gratitude: Option<String>,
    pub affirmation: Option<String>,
    pub script: String,
}

impl PlanSheet {
    pub fn from_answers(answers: &Answers) -> Self {
        let goal_statement = answers
            .goals
            .goal_at(0)
            .and_then(|goal| answers.goals.detail(goal))
            .map(|detail| detail.what_to_achieve.clone());

        Self {
            links: answers.plan_links.clone(),
            vision_image: answers.vision.latest().map(|(_, img)| img.clone()),
            goal_statement,
            fear: answers.belief.fear.clone(),
            hooponopono: HOOPONOPONO_LINE,
            gratitude: answers.affirmations.gratitude.first().cloned(),
            affirmation: answers.affirmations.affirmations.first().cloned(),
            script: answers.script.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{render_affirmations, render_script, TemplateTable};
    use crate::types::GoalField;
    use crate::vision::{encode_image, fixtures::png_bytes};

    fn sample_answers() -> Answers {
        let mut answers = Answers::default();
        answers.goals.toggle("Get a promotion");
        answers.goals.toggle("Increase income");
        answers
            .goals
            .set_field("Get a promotion", GoalField::WhatToAchieve, "Lead the team");
        answers.belief.fear = "Not being good enough".to_string();
        let table = TemplateTable::default();
        answers.affirmations = render_affirmations(answers.goals.goals(), &table);
        answers.script = render_script(answers.goals.goals(), &table);
        answers
    }

    #[test]
    fn plan_totals_thirty_minutes() {
        let plan = PracticePlan::from_answers(&sample_answers());
        assert_eq!(plan.activities.len(), 7);
        assert_eq!(plan.total_minutes(), 30);
    }

    #[test]
    fn plan_joins_statements() {
        let plan = PracticePlan::from_answers(&sample_answers());
        let gratitude = &plan.activities[3];
        assert_eq!(gratitude.name, "Gratitude");
        assert_eq!(
            gratitude.body,
            ActivityBody::Text(
                "I am grateful for the opportunity to get a promotion., I am grateful for the opportunity to increase income."
                    .to_string()
            )
        );
    }

    #[test]
    fn plan_images_follow_selection_order() {
        let mut answers = sample_answers();
        let img = encode_image(Some(&png_bytes())).unwrap();
        answers.vision.insert("Increase income", img.clone());
        answers.vision.insert("Get a promotion", img);

        let plan = PracticePlan::from_answers(&answers);
        match &plan.activities[6].body {
            ActivityBody::Images(images) => {
                let goals: Vec<_> = images.iter().map(|(g, _)| g.as_str()).collect();
                assert_eq!(goals, vec!["Get a promotion", "Increase income"]);
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn sheet_takes_first_entries() {
        let mut answers = sample_answers();
        answers.plan_links.set(PlanLink::Silence, "https://example.com/silence");
        let sheet = PlanSheet::from_answers(&answers);

        assert_eq!(sheet.goal_statement.as_deref(), Some("Lead the team"));
        assert_eq!(sheet.fear, "Not being good enough");
        assert_eq!(
            sheet.affirmation.as_deref(),
            Some("I am confident in my ability to get a promotion.")
        );
        assert_eq!(sheet.links.get(PlanLink::Silence), "https://example.com/silence");
        assert!(sheet.vision_image.is_none());
    }

    #[test]
    fn sheet_uses_latest_upload() {
        let mut answers = sample_answers();
        let small = encode_image(Some(&png_bytes())).unwrap();
        let other = encode_image(Some(&crate::vision::fixtures::image_bytes(
            image::ImageFormat::Png,
            9,
            9,
        )))
        .unwrap();
        answers.vision.insert("Get a promotion", small);
        answers.vision.insert("Increase income", other.clone());

        let sheet = PlanSheet::from_answers(&answers);
        assert_eq!(sheet.vision_image, Some(other));
    }
}
