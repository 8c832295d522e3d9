//! Dashboard simulation handlers.

mod generate_dashboard_simulation;

pub use generate_dashboard_simulation::{
    GenerateDashboardSimulationHandler, GenerateSimulationCommand, SimulationError,
    SimulationOutcome, SimulationSettings, StateSource,
};
