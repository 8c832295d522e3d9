//! Prompt construction for dashboard simulation requests.

use super::scenario::ScenarioType;

/// Channels every generated dashboard must cover.
pub const PLATFORMS: [&str; 4] = ["TikTok", "Reddit", "Google", "Twitter"];

/// Points per platform sparkline.
pub const SPARKLINE_POINTS: usize = 5;

/// Points in the sentiment history chart.
pub const HISTORY_POINTS: usize = 7;

/// Instruction text sent to the model for one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationPrompt {
    scenario: ScenarioType,
    text: String,
}

impl SimulationPrompt {
    pub fn for_scenario(scenario: ScenarioType) -> Self {
        let range = |s: ScenarioType| {
            let r = s.score_range();
            format!("{}-{}", r.start(), r.end())
        };

        let text = format!(
            "Generate a JSON object representing the state of a \"Brand Reputation Dashboard\" (VibeScore).\n\
             The scenario is: {scenario}.\n\
             \n\
             The \"vibeScore\" should be between 0-100.\n\
             If Crisis, score is low ({crisis}). If Success, high ({success}). If Normal, ({normal}).\n\
             \n\
             \"alerts\" should be relevant to a social media manager.\n\
             \"platforms\" should cover {platforms}. Provide {points} data points for sparklines for each platform.\n\
             \"sentimentHistory\" should contain {history} hourly points.\n\
             \n\
             Return ONLY valid JSON conforming to the schema.",
            scenario = scenario,
            crisis = range(ScenarioType::Crisis),
            success = range(ScenarioType::ViralSuccess),
            normal = range(ScenarioType::Normal),
            platforms = PLATFORMS.join(", "),
            points = SPARKLINE_POINTS,
            history = HISTORY_POINTS,
        );

        Self { scenario, text }
    }

    pub fn scenario(&self) -> ScenarioType {
        self.scenario
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
