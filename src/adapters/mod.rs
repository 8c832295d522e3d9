//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Hosted model providers (Gemini) and a mock for tests

pub mod ai;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider, MockError};
