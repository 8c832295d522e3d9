use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::domain::foundation::{Percentage, ValidationError};

use super::status::VibeStatus;

/// Snapshot of the reputation dashboard shown on the landing page.
///
/// Either the static fallback or a value decoded from a model response.
/// Every field defaults, so a partial response still decodes and the
/// derived schema marks nothing as required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardState {
    /// Gamification level of the brand manager.
    pub level: i32,
    /// Experience earned within the current level.
    #[serde(rename = "currentXP")]
    pub current_xp: i32,
    /// Experience needed to finish the current level.
    #[serde(rename = "maxXP")]
    pub max_xp: i32,
    /// Aggregate sentiment score between 0 and 100.
    #[schemars(range(min = 0, max = 100))]
    pub vibe_score: i32,
    /// Consecutive days of positive sentiment.
    pub streak: i32,
    /// Mentions tracked across all platforms.
    pub total_mentions: i64,
    /// Human readable audience size, e.g. "2.4M".
    pub reach: String,
    /// Alerts for a social media manager, most recent first.
    pub alerts: Vec<Alert>,
    /// Recently unlocked achievements.
    pub achievements: Vec<Achievement>,
    /// Share of voice per platform (TikTok, Reddit, Google, Twitter).
    pub platforms: Vec<PlatformStat>,
    /// Hourly sentiment scores for the trend chart.
    pub sentiment_history: Vec<SentimentPoint>,
}

/// Severity of a dashboard alert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    Critical,
    #[default]
    Warning,
    Success,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Alert {
    /// Unique alert identifier.
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    /// Relative time, e.g. "2 min ago".
    pub time: String,
    /// Effect on sentiment, e.g. "-12% sentiment".
    pub impact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Experience awarded for handling the alert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Achievement {
    pub name: String,
    pub xp: i32,
    /// Icon name, e.g. "shield" or "trending-up".
    pub icon: String,
}

/// Direction of a platform's sentiment sparkline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    #[default]
    Up,
    Down,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PlatformStat {
    pub name: String,
    /// Share of voice between 0 and 100.
    #[schemars(range(min = 0, max = 100))]
    pub percentage: i32,
    pub trend: Trend,
    /// Five point sparkline sample.
    pub data: Vec<i32>,
}

impl PlatformStat {
    /// Magnitude of the change across the sparkline, shown next to the trend arrow.
    pub fn delta(&self) -> i32 {
        match (self.data.first(), self.data.last()) {
            (Some(first), Some(last)) => (last - first).abs(),
            _ => 0,
        }
    }

    /// Whether `trend` agrees with the sign of `data[last] - data[first]`.
    ///
    /// A flat or empty sparkline agrees with either direction.
    pub fn trend_agrees(&self) -> bool {
        let (Some(first), Some(last)) = (self.data.first(), self.data.last()) else {
            return true;
        };
        match self.trend {
            Trend::Up => last >= first,
            Trend::Down => last <= first,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SentimentPoint {
    /// Time label, e.g. "14:00".
    pub time: String,
    #[schemars(range(min = 0, max = 100))]
    pub score: i32,
}

impl DashboardState {
    /// Status bucket for the current vibe score.
    pub fn status(&self) -> VibeStatus {
        VibeStatus::from_score(Percentage::new(self.vibe_score))
    }

    /// Fraction of the current level completed, in [0.0, 1.0].
    pub fn xp_progress(&self) -> f64 {
        if self.max_xp <= 0 {
            return 0.0;
        }
        (f64::from(self.current_xp) / f64::from(self.max_xp)).clamp(0.0, 1.0)
    }

    /// Decodes a model response.
    ///
    /// Whole-number floats such as `72.0` are accepted where integers are
    /// expected; fractional values still fail to decode.
    pub fn from_model_json(text: &str) -> serde_json::Result<Self> {
        let mut value: Value = serde_json::from_str(text)?;
        integralize(&mut value);
        serde_json::from_value(value)
    }

    /// Names of platforms whose trend disagrees with their sparkline.
    pub fn trend_mismatches(&self) -> Vec<&str> {
        self.platforms
            .iter()
            .filter(|p| !p.trend_agrees())
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Every bound this value breaks, without modifying it.
    pub fn violations(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = Percentage::try_new("vibeScore", self.vibe_score) {
            errors.push(e);
        }

        errors.extend(negative("level", i64::from(self.level)));

        let max_xp = self.max_xp.max(0);
        if !(0..=max_xp).contains(&self.current_xp) {
            errors.push(ValidationError::out_of_range(
                "currentXP",
                0,
                max_xp,
                self.current_xp,
            ));
        }
        errors.extend(negative("maxXP", i64::from(self.max_xp)));
        errors.extend(negative("streak", i64::from(self.streak)));
        errors.extend(negative("totalMentions", self.total_mentions));

        for (i, alert) in self.alerts.iter().enumerate() {
            if let Some(xp) = alert.xp {
                errors.extend(negative(format!("alerts[{}].xp", i), i64::from(xp)));
            }
        }

        for (i, achievement) in self.achievements.iter().enumerate() {
            errors.extend(negative(
                format!("achievements[{}].xp", i),
                i64::from(achievement.xp),
            ));
        }

        for (i, platform) in self.platforms.iter().enumerate() {
            let field = format!("platforms[{}].percentage", i);
            if let Err(e) = Percentage::try_new(&field, platform.percentage) {
                errors.push(e);
            }
        }

        for (i, point) in self.sentiment_history.iter().enumerate() {
            let field = format!("sentimentHistory[{}].score", i);
            if let Err(e) = Percentage::try_new(&field, point.score) {
                errors.push(e);
            }
        }

        errors
    }

    /// Clamps every bounded field into range and returns what was corrected.
    ///
    /// Counters are floored at zero and `currentXP` is kept within
    /// `[0, maxXP]`. Trend/sparkline disagreement is left as is.
    pub fn sanitize(&mut self) -> Vec<ValidationError> {
        let corrected = self.violations();
        if corrected.is_empty() {
            return corrected;
        }

        self.vibe_score = Percentage::new(self.vibe_score).as_i32();
        self.level = self.level.max(0);
        self.max_xp = self.max_xp.max(0);
        self.current_xp = self.current_xp.clamp(0, self.max_xp);
        self.streak = self.streak.max(0);
        self.total_mentions = self.total_mentions.max(0);
        for alert in &mut self.alerts {
            alert.xp = alert.xp.map(|xp| xp.max(0));
        }
        for achievement in &mut self.achievements {
            achievement.xp = achievement.xp.max(0);
        }
        for platform in &mut self.platforms {
            platform.percentage = Percentage::new(platform.percentage).as_i32();
        }
        for point in &mut self.sentiment_history {
            point.score = Percentage::new(point.score).as_i32();
        }

        corrected
    }
}

fn negative(field: impl Into<String>, value: i64) -> Option<ValidationError> {
    (value < 0).then(|| {
        ValidationError::out_of_range(
            field,
            0,
            i32::MAX,
            i32::try_from(value).unwrap_or(i32::MIN),
        )
    })
}

/// Rewrites whole-number floats as integers, recursively.
fn integralize(value: &mut Value) {
    match value {
        Value::Array(items) => items.iter_mut().for_each(integralize),
        Value::Object(map) => map.values_mut().for_each(integralize),
        Value::Number(n) => {
            if let Some(whole) = whole_float(n) {
                *value = Value::from(whole);
            }
        }
        _ => {}
    }
}

fn whole_float(n: &Number) -> Option<i64> {
    if !n.is_f64() {
        return None;
    }
    let f = n.as_f64()?;
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
