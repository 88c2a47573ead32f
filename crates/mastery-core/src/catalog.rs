//! Fixed copy: the goal catalog and per-section text.

/// Goals offered by the selector, in display order.
pub const CAREER_GOALS: [&str; 10] = [
    "Get a promotion",
    "Switch careers",
    "Start a business",
    "Improve work-life balance",
    "Develop new skills",
    "Increase income",
    "Find a new job",
    "Expand professional network",
    "Achieve a specific career milestone",
    "Improve job satisfaction",
];

pub const APP_TITLE: &str = "Manifest Mastery";
pub const APP_TAGLINE: &str = "Manifest your dreams with AI-powered guidance";

pub const WELCOME_HEADLINE: &str = "Excited to start your goals manifestation?";
pub const WELCOME_SUBLINE: &str = "Start Your Manifestation Journey Today!";

pub const CAREER_GOALS_INSTRUCTIONS: &str = "This section helps you map out what you want to achieve in your career and the steps to get there.";
pub const LIMITING_BELIEFS_INSTRUCTIONS: &str = "This section helps you build confidence to pursue new opportunities and overcome career obstacles by removing fears/doubts that are holding you back to achieve your goal.";
pub const LIMITING_BELIEFS_OUTLINE: &str = "This section has 3 steps for you to understand your limiting belief and get rid of them to make your manifesting journey faster";
pub const AFFIRMATIONS_INSTRUCTIONS: &str = "This section helps you build a mindset of success by affirming your strengths and acknowledging the progress you've made, which keeps you motivated and focused on career growth.";
pub const SCRIPT_INSTRUCTIONS: &str = "This personalized career script will serve as a powerful tool to guide your intentions and manifest your dream career.";
pub const VISION_BOARD_INSTRUCTIONS: &str = "Use this section to build a visual representation that captures your career goals all in one place for you to practice. You can download and use it as your desktop or phone wallpaper for daily inspiration.";
pub const PLAN_INSTRUCTIONS: &str = "This section helps you to be aligned with your career manifestation goals.";

/// Intro paragraphs of the full journey
pub const INTRO_EXTENDED: [&str; 3] = [
    "Start your journey to transforming every aspect of your life with the ManifestMastery app. We're here to help you set and achieve your goals, overcome doubts and fears, and rewire your mindset with powerful affirmations and gratitude practices.",
    "In this phase, we're focusing on helping you achieve your career goals. Our step-by-step guide will ensure you stay on track and manifest your career aspirations with ease.",
    "Explore the tools and features designed to bring your professional goals to life.",
];

/// Intro paragraphs of the compact journey
pub const INTRO_COMPACT: [&str; 2] = [
    "Transform your life with the ManifestMastery app! Achieve your career goals, overcome doubts, and rewire your mindset with powerful affirmations and gratitude practices.",
    "Our step-by-step guide in phase 1 keeps you on track to manifest your professional aspirations effortlessly. Download now and start your journey to success!",
];

/// True if `name` is one of the catalog goals
pub fn is_catalog_goal(name: &str) -> bool {
    CAREER_GOALS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_no_duplicates() {
        let mut goals = CAREER_GOALS.to_vec();
        goals.sort_unstable();
        goals.dedup();
        assert_eq!(goals.len(), CAREER_GOALS.len());
    }

    #[test]
    fn catalog_lookup() {
        assert!(is_catalog_goal("Start a business"));
        assert!(!is_catalog_goal("start a business"));
    }
}
