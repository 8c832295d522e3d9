//! Dashboard simulation vocabulary: scenarios, prompts and the response schema.

pub mod prompt;
pub mod scenario;
pub mod schema;

pub use prompt::{SimulationPrompt, HISTORY_POINTS, PLATFORMS, SPARKLINE_POINTS};
pub use scenario::ScenarioType;
pub use schema::dashboard_response_schema;
