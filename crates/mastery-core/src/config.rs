//! Journey configuration.
//!
//! Everything that differed between the historical variants of the
//! questionnaire (step list, copy, plan layout) is selected here instead of
//! living in separate copies of the flow.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{MasteryError, MasteryResult};
use crate::template::TemplateTable;
use crate::types::DEFAULT_MAX_GOALS;

/// Which step sequence to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyVariant {
    /// Every step, including the per-goal overview; plan shown as a checklist
    #[default]
    Extended,
    /// No overview step; plan shown as a single dashboard sheet
    Compact,
}

impl JourneyVariant {
    pub fn name(&self) -> &'static str {
        match self {
            JourneyVariant::Extended => "extended",
            JourneyVariant::Compact => "compact",
        }
    }

    /// Intro paragraphs shown for this variant
    pub fn intro(&self) -> &'static [&'static str] {
        match self {
            JourneyVariant::Extended => &crate::catalog::INTRO_EXTENDED,
            JourneyVariant::Compact => &crate::catalog::INTRO_COMPACT,
        }
    }
}

impl fmt::Display for JourneyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JourneyVariant {
    type Err = MasteryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extended" | "full" => Ok(JourneyVariant::Extended),
            "compact" => Ok(JourneyVariant::Compact),
            other => Err(MasteryError::Config(format!(
                "unknown journey variant '{}' (expected 'extended' or 'compact')",
                other
            ))),
        }
    }
}

/// Settings for one wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyConfig {
    pub variant: JourneyVariant,
    /// Upper bound on selected goals
    pub max_goals: usize,
    /// Year printed in the vision board title
    pub board_year: i32,
    pub templates: TemplateTable,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            variant: JourneyVariant::default(),
            max_goals: DEFAULT_MAX_GOALS,
            board_year: chrono::Local::now().year(),
            templates: TemplateTable::default(),
        }
    }
}

impl JourneyConfig {
    pub fn with_variant(mut self, variant: JourneyVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_board_year(mut self, year: i32) -> Self {
        self.board_year = year;
        self
    }

    /// Parse a JSON config; missing keys take their defaults.
    pub fn from_json(json: &str) -> MasteryResult<Self> {
        let config: JourneyConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> MasteryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), variant = %config.variant, "Loaded journey config");
        Ok(config)
    }

    pub fn validate(&self) -> MasteryResult<()> {
        if !(1..=DEFAULT_MAX_GOALS).contains(&self.max_goals) {
            return Err(MasteryError::Config(format!(
                "max_goals must be between 1 and {} (got {})",
                DEFAULT_MAX_GOALS, self.max_goals
            )));
        }
        if !self.templates.script.contains(crate::template::GOALS_PLACEHOLDER) {
            tracing::warn!("Script template has no {{goals}} placeholder");
        }
        Ok(())
    }

    /// "Vision Board <year>"
    pub fn board_title(&self) -> String {
        format!("Vision Board {}", self.board_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = JourneyConfig::default();
        assert_eq!(config.variant, JourneyVariant::Extended);
        assert_eq!(config.max_goals, 3);
        assert!(config.board_year >= 2024);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = JourneyConfig::from_json(r#"{"variant":"compact","board_year":2024}"#).unwrap();
        assert_eq!(config.variant, JourneyVariant::Compact);
        assert_eq!(config.board_title(), "Vision Board 2024");
        assert_eq!(config.templates, TemplateTable::default());
    }

    #[test]
    fn zero_max_goals_rejected() {
        let err = JourneyConfig::from_json(r#"{"max_goals":0}"#).unwrap_err();
        assert!(matches!(err, MasteryError::Config(_)));
    }

    #[test]
    fn max_goals_above_three_rejected() {
        for max in [4, 5] {
            let json = format!(r#"{{"max_goals":{}}}"#, max);
            let err = JourneyConfig::from_json(&json).unwrap_err();
            assert!(matches!(err, MasteryError::Config(_)));
        }
    }

    #[test]
    fn max_goals_within_limit_accepted() {
        for max in 1..=3 {
            let json = format!(r#"{{"max_goals":{}}}"#, max);
            assert_eq!(JourneyConfig::from_json(&json).unwrap().max_goals, max);
        }
    }

    #[test]
    fn malformed_json_rejected() {
        let err = JourneyConfig::from_json("{variant:").unwrap_err();
        assert!(matches!(err, MasteryError::Json(_)));
    }

    #[test]
    fn variant_from_str() {
        assert_eq!("Compact".parse::<JourneyVariant>().unwrap(), JourneyVariant::Compact);
        assert_eq!("full".parse::<JourneyVariant>().unwrap(), JourneyVariant::Extended);
        assert!("tiny".parse::<JourneyVariant>().is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journey.json");
        std::fs::write(&path, r#"{"max_goals":2}"#).unwrap();
        let config = JourneyConfig::load(&path).unwrap();
        assert_eq!(config.max_goals, 2);
    }
}
