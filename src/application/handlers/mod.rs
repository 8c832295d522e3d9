//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over ports.

pub mod simulation;

pub use simulation::{
    GenerateDashboardSimulationHandler, GenerateSimulationCommand, SimulationError,
    SimulationOutcome, SimulationSettings, StateSource,
};
