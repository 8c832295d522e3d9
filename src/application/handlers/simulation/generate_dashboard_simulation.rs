//! GenerateDashboardSimulationHandler - Produces a dashboard state for a demo scenario.
//!
//! Asks the model for JSON matching the dashboard schema. Any failure
//! (transport, timeout, empty text, undecodable JSON) is logged and answered
//! with [`DashboardState::fallback`], so callers never see an error.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, error, warn};

use crate::domain::dashboard::DashboardState;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::simulation::{dashboard_response_schema, ScenarioType, SimulationPrompt};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata};

/// Tuning for simulation requests.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSettings {
    /// Upper bound on the whole model round trip.
    pub timeout: Duration,
    /// Clamp out-of-range values in generated states.
    pub sanitize: bool,
    /// Maximum tokens the model may generate.
    pub max_output_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            sanitize: true,
            max_output_tokens: None,
            temperature: None,
        }
    }
}

/// Command to generate one dashboard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSimulationCommand {
    pub scenario: ScenarioType,
}

/// Where a returned state came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateSource {
    /// Decoded from a model response.
    Generated { model: String },
    /// The static fallback, with the failure that caused it.
    Fallback { reason: String },
}

/// Result of a simulation request. Never an error.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub scenario: ScenarioType,
    pub state: DashboardState,
    pub source: StateSource,
    /// Bounds clamped while sanitizing a generated state.
    pub corrections: Vec<ValidationError>,
    pub trace_id: String,
    pub generated_at: Timestamp,
}

impl SimulationOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, StateSource::Fallback { .. })
    }
}

/// Failures that trigger the fallback.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Provider(#[from] AIError),

    #[error("model response is not dashboard JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("model did not answer within {0:?}")]
    TimedOut(Duration),
}

/// Handler producing dashboard states from a hosted model.
pub struct GenerateDashboardSimulationHandler {
    provider: Arc<dyn AIProvider>,
    settings: SimulationSettings,
}

impl GenerateDashboardSimulationHandler {
    pub fn new(provider: Arc<dyn AIProvider>, settings: SimulationSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Dashboard state for `scenario`; the fallback on any failure.
    pub async fn generate(&self, scenario: ScenarioType) -> DashboardState {
        self.handle(GenerateSimulationCommand { scenario }).await.state
    }

    /// Generates all scenarios concurrently. Results follow [`ScenarioType::ALL`] order.
    pub async fn generate_all(&self) -> Vec<SimulationOutcome> {
        join_all(
            ScenarioType::ALL
                .into_iter()
                .map(|scenario| self.handle(GenerateSimulationCommand { scenario })),
        )
        .await
    }

    pub async fn handle(&self, cmd: GenerateSimulationCommand) -> SimulationOutcome {
        let metadata = RequestMetadata::generate();
        let trace_id = metadata.trace_id.clone();

        match self.try_generate(cmd.scenario, metadata).await {
            Ok((mut state, model)) => {
                let corrections = if self.settings.sanitize {
                    state.sanitize()
                } else {
                    Vec::new()
                };
                for correction in &corrections {
                    warn!(%trace_id, scenario = %cmd.scenario, "Clamped generated value: {}", correction);
                }

                let mismatches = state.trend_mismatches();
                if !mismatches.is_empty() {
                    debug!(%trace_id, platforms = ?mismatches, "Trend disagrees with sparkline");
                }

                SimulationOutcome {
                    scenario: cmd.scenario,
                    state,
                    source: StateSource::Generated { model },
                    corrections,
                    trace_id,
                    generated_at: Timestamp::now(),
                }
            }
            Err(err) => {
                error!(
                    %trace_id,
                    scenario = %cmd.scenario,
                    error = %err,
                    "Dashboard simulation failed, using fallback"
                );

                SimulationOutcome {
                    scenario: cmd.scenario,
                    state: DashboardState::fallback(),
                    source: StateSource::Fallback {
                        reason: err.to_string(),
                    },
                    corrections: Vec::new(),
                    trace_id,
                    generated_at: Timestamp::now(),
                }
            }
        }
    }

    /// Builds the structured-output request for a scenario.
    pub fn build_request(&self, scenario: ScenarioType, metadata: RequestMetadata) -> CompletionRequest {
        let prompt = SimulationPrompt::for_scenario(scenario);
        let mut request = CompletionRequest::new(metadata)
            .with_message(MessageRole::User, prompt.into_text())
            .with_json_schema(dashboard_response_schema().clone());

        if let Some(max) = self.settings.max_output_tokens {
            request = request.with_max_tokens(max);
        }
        if let Some(temp) = self.settings.temperature {
            request = request.with_temperature(temp);
        }
        request
    }

    async fn try_generate(
        &self,
        scenario: ScenarioType,
        metadata: RequestMetadata,
    ) -> Result<(DashboardState, String), SimulationError> {
        let request = self.build_request(scenario, metadata);

        debug!(
            trace_id = %request.metadata.trace_id,
            %scenario,
            provider = %self.provider.provider_info().name,
            "Requesting dashboard simulation"
        );

        let response = tokio::time::timeout(self.settings.timeout, self.provider.complete(request))
            .await
            .map_err(|_| SimulationError::TimedOut(self.settings.timeout))??;

        if response.content.trim().is_empty() {
            return Err(AIError::EmptyResponse.into());
        }

        let state = DashboardState::from_model_json(&response.content)?;
        Ok((state, response.model))
    }
}
