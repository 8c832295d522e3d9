//! End-to-end simulation tests through the public crate API.
//!
//! These run the handler against the mock provider, so no network access is needed.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use vibescore::adapters::{MockAIProvider, MockError};
use vibescore::application::{
    GenerateDashboardSimulationHandler, GenerateSimulationCommand, SimulationSettings, StateSource,
};
use vibescore::domain::dashboard::{AlertType, DashboardState, Trend, VibeStatus};
use vibescore::domain::foundation::Percentage;
use vibescore::domain::simulation::ScenarioType;

fn crisis_json() -> String {
    json!({
        "level": 4,
        "currentXP": 800,
        "maxXP": 2000,
        "vibeScore": 35,
        "streak": 0,
        "totalMentions": 9120,
        "reach": "5.1M",
        "alerts": [
            {
                "id": "c1",
                "type": "CRITICAL",
                "message": "Boycott hashtag trending",
                "time": "5m ago",
                "impact": "-12 pts",
                "source": "Twitter/X"
            }
        ],
        "achievements": [
            { "name": "Crisis Responder", "xp": 150, "icon": "shield" }
        ],
        "platforms": [
            { "name": "Twitter/X", "percentage": 22, "trend": "down", "data": [60, 50, 41, 30, 22] },
            { "name": "Reddit", "percentage": 30, "trend": "down", "data": [55, 48, 40, 35, 30] },
            { "name": "TikTok", "percentage": 45, "trend": "down", "data": [45, 46, 44, 45, 45] },
            { "name": "Google News", "percentage": 28, "trend": "down", "data": [50, 44, 39, 31, 28] }
        ],
        "sentimentHistory": [
            { "time": "10:00", "score": 62 },
            { "time": "11:00", "score": 55 },
            { "time": "12:00", "score": 48 },
            { "time": "13:00", "score": 41 },
            { "time": "14:00", "score": 37 },
            { "time": "15:00", "score": 36 },
            { "time": "16:00", "score": 35 }
        ]
    })
    .to_string()
}

fn handler(provider: MockAIProvider) -> GenerateDashboardSimulationHandler {
    GenerateDashboardSimulationHandler::new(Arc::new(provider), SimulationSettings::default())
}

#[tokio::test]
async fn crisis_response_is_returned_as_generated() {
    let provider = MockAIProvider::new().with_response(crisis_json());
    let handler = handler(provider.clone());

    let outcome = handler
        .handle(GenerateSimulationCommand {
            scenario: ScenarioType::Crisis,
        })
        .await;

    assert!(!outcome.is_fallback());
    assert!(outcome.corrections.is_empty());
    assert_eq!(outcome.state.vibe_score, 35);
    assert_eq!(outcome.state.alerts[0].alert_type, AlertType::Critical);
    assert_eq!(outcome.state.alerts[0].source.as_deref(), Some("Twitter/X"));
    assert_eq!(outcome.state.platforms[0].trend, Trend::Down);
    assert_eq!(outcome.state.sentiment_history.len(), 7);
    assert_eq!(
        VibeStatus::from_score(Percentage::new(outcome.state.vibe_score)),
        VibeStatus::Critical
    );
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn generated_state_round_trips_to_the_same_json() {
    let provider = MockAIProvider::new().with_response(crisis_json());

    let state = handler(provider).generate(ScenarioType::Crisis).await;

    let expected: serde_json::Value = serde_json::from_str(&crisis_json()).unwrap();
    assert_eq!(serde_json::to_value(&state).unwrap(), expected);
}

#[tokio::test]
async fn offline_provider_serves_fallback_for_every_scenario() {
    let handler = handler(MockAIProvider::offline());

    let outcomes = handler.generate_all().await;

    assert_eq!(outcomes.len(), ScenarioType::ALL.len());
    for (outcome, scenario) in outcomes.iter().zip(ScenarioType::ALL) {
        assert_eq!(outcome.scenario, scenario);
        assert!(matches!(outcome.source, StateSource::Fallback { .. }));
        assert_eq!(outcome.state, DashboardState::fallback());
        assert_eq!(outcome.state.vibe_score, 72);
        assert_eq!(outcome.state.streak, 3);
    }
}

#[tokio::test]
async fn rate_limited_provider_falls_back_without_retrying() {
    let provider =
        MockAIProvider::new().with_error(MockError::RateLimited { retry_after_secs: 30 });
    let handler = handler(provider.clone());

    let state = handler.generate(ScenarioType::ViralSuccess).await;

    assert_eq!(state, DashboardState::fallback());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn slow_provider_falls_back_after_timeout() {
    let provider = MockAIProvider::new()
        .with_response(crisis_json())
        .with_delay(Duration::from_millis(250));
    let handler = GenerateDashboardSimulationHandler::new(
        Arc::new(provider),
        SimulationSettings {
            timeout: Duration::from_millis(25),
            ..SimulationSettings::default()
        },
    );

    let outcome = handler
        .handle(GenerateSimulationCommand {
            scenario: ScenarioType::Crisis,
        })
        .await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.state.vibe_score, 72);
}

#[tokio::test]
async fn truncated_json_falls_back() {
    let mut text = crisis_json();
    text.truncate(text.len() / 2);
    let handler = handler(MockAIProvider::new().with_response(text));

    let outcome = handler
        .handle(GenerateSimulationCommand {
            scenario: ScenarioType::Normal,
        })
        .await;

    match outcome.source {
        StateSource::Fallback { reason } => assert!(reason.contains("not dashboard JSON")),
        other => panic!("expected fallback, got {:?}", other),
    }
}

#[tokio::test]
async fn requests_carry_scenario_prompt_and_schema() {
    let provider = MockAIProvider::offline();
    let handler = handler(provider.clone());

    handler.generate(ScenarioType::ViralSuccess).await;

    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].user_text().contains("80-100"));
    let format = calls[0].response_format.as_ref().unwrap();
    assert_eq!(format.mime_type, "application/json");
    assert!(format.schema["properties"]["vibeScore"].is_object());
}
