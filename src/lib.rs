//! VibeScore - Dashboard Simulation Service
//!
//! This crate produces realistic brand-reputation dashboard states for the
//! VibeScore demo by asking a hosted generative model for JSON that follows
//! the dashboard schema, and falls back to a fixed sample state whenever the
//! model cannot deliver one.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
