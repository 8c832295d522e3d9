//! VibeScore simulation CLI.
//!
//! Prints generated dashboard states as JSON on stdout. Logs go to stderr.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use vibescore::adapters::{GeminiConfig, GeminiProvider, MockAIProvider};
use vibescore::application::{
    GenerateDashboardSimulationHandler, GenerateSimulationCommand, SimulationOutcome,
};
use vibescore::config::{AppConfig, ConfigError, ValidationError};
use vibescore::domain::dashboard::VibeStatus;
use vibescore::domain::foundation::Percentage;
use vibescore::domain::simulation::ScenarioType;
use vibescore::ports::{AIError, AIProvider};

#[derive(Parser, Debug)]
#[command(name = "vibescore")]
#[command(about = "Generate simulated VibeScore dashboard states")]
#[command(version)]
struct Args {
    /// Scenario to simulate (CRISIS, VIRAL_SUCCESS, NORMAL)
    #[arg(default_value = "NORMAL")]
    scenario: ScenarioType,

    /// Generate every scenario concurrently
    #[arg(long)]
    all: bool,

    /// Skip the model and print the fallback state
    #[arg(long)]
    offline: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("failed to build AI provider: {0}")]
    Provider(#[from] AIError),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "vibescore failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate()?;

    let provider = build_provider(&config, args.offline)?;
    let handler = GenerateDashboardSimulationHandler::new(provider, config.simulation.settings());

    let output = if args.all {
        let mut states = Map::new();
        for outcome in handler.generate_all().await {
            report(&outcome);
            states.insert(
                outcome.scenario.as_str().to_string(),
                serde_json::to_value(&outcome.state)?,
            );
        }
        Value::Object(states)
    } else {
        let outcome = handler
            .handle(GenerateSimulationCommand {
                scenario: args.scenario,
            })
            .await;
        report(&outcome);
        serde_json::to_value(&outcome.state)?
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}

fn build_provider(config: &AppConfig, offline: bool) -> Result<Arc<dyn AIProvider>, CliError> {
    let api_key = match config.ai.api_key.as_deref() {
        Some(key) if !offline && config.ai.has_api_key() => key,
        _ => {
            if !offline {
                warn!("No Gemini API key configured, serving fallback dashboard");
            }
            return Ok(Arc::new(MockAIProvider::offline()));
        }
    };

    let gemini = GeminiConfig::new(api_key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout());

    info!(model = %config.ai.model, "Using Gemini provider");
    Ok(Arc::new(GeminiProvider::new(gemini)?))
}

fn report(outcome: &SimulationOutcome) {
    let status = VibeStatus::from_score(Percentage::new(outcome.state.vibe_score));
    info!(
        trace_id = %outcome.trace_id,
        scenario = %outcome.scenario,
        vibe_score = outcome.state.vibe_score,
        status = %status,
        fallback = outcome.is_fallback(),
        corrections = outcome.corrections.len(),
        "Dashboard state ready"
    );
}
