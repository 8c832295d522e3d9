//! Domain layer - value types for the VibeScore dashboard demo.

pub mod dashboard;
pub mod foundation;
pub mod simulation;
