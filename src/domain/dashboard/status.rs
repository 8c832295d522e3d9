//! Vibe score status buckets.
//!
//! Presentation policy used by consumers of [`DashboardState`](super::DashboardState);
//! the simulation service never consults it.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::Percentage;

/// Reputation health derived from a vibe score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VibeStatus {
    /// 80 and above.
    Excellent,
    /// 60 to 79.
    Healthy,
    /// 40 to 59.
    AtRisk,
    /// Below 40.
    Critical,
}

impl VibeStatus {
    pub fn from_score(score: Percentage) -> Self {
        match score.value() {
            80..=u8::MAX => VibeStatus::Excellent,
            60..=79 => VibeStatus::Healthy,
            40..=59 => VibeStatus::AtRisk,
            _ => VibeStatus::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VibeStatus::Excellent => "EXCELLENT",
            VibeStatus::Healthy => "HEALTHY",
            VibeStatus::AtRisk => "AT RISK",
            VibeStatus::Critical => "CRITICAL",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VibeStatus::Excellent => "Sentiment is overwhelmingly positive.",
            VibeStatus::Healthy => "Stable reputation. No immediate threats.",
            VibeStatus::AtRisk => "Negative trends detected. Monitoring required.",
            VibeStatus::Critical => "Immediate crisis intervention recommended.",
        }
    }
}

impl fmt::Display for VibeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
