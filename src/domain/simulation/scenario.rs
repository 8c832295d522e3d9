use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Named demo mode biasing the generated dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScenarioType {
    /// Brand under attack.
    Crisis,
    /// Positive content going viral.
    ViralSuccess,
    /// Business as usual.
    Normal,
}

impl ScenarioType {
    /// All scenarios, in display order.
    pub const ALL: [ScenarioType; 3] = [
        ScenarioType::Crisis,
        ScenarioType::ViralSuccess,
        ScenarioType::Normal,
    ];

    /// Wire name used in prompts and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioType::Crisis => "CRISIS",
            ScenarioType::ViralSuccess => "VIRAL_SUCCESS",
            ScenarioType::Normal => "NORMAL",
        }
    }

    /// Vibe score range the model is asked to stay within.
    pub fn score_range(&self) -> RangeInclusive<u8> {
        match self {
            ScenarioType::Crisis => 20..=50,
            ScenarioType::ViralSuccess => 80..=100,
            ScenarioType::Normal => 60..=80,
        }
    }
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "CRISIS" => Ok(ScenarioType::Crisis),
            "VIRAL_SUCCESS" => Ok(ScenarioType::ViralSuccess),
            "NORMAL" => Ok(ScenarioType::Normal),
            _ => Err(ValidationError::invalid_format(
                "scenario",
                format!("unknown scenario '{}'", s),
            )),
        }
    }
}
