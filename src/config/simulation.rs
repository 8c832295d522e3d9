//! Dashboard simulation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::SimulationSettings;

/// Dashboard simulation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Upper bound on one simulation round trip, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Clamp out-of-range values returned by the model
    #[serde(default = "default_sanitize")]
    pub sanitize: bool,

    /// Maximum tokens the model may generate
    pub max_output_tokens: Option<u32>,

    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl SimulationConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate simulation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ValidationError::InvalidTemperature);
            }
        }

        Ok(())
    }

    /// Handler settings for this configuration
    pub fn settings(&self) -> SimulationSettings {
        SimulationSettings {
            timeout: self.timeout(),
            sanitize: self.sanitize,
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            sanitize: default_sanitize(),
            max_output_tokens: None,
            temperature: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_sanitize() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_handler_defaults() {
        assert_eq!(SimulationConfig::default().settings(), SimulationSettings::default());
    }

    #[test]
    fn test_settings_carry_overrides() {
        let config = SimulationConfig {
            timeout_secs: 5,
            sanitize: false,
            max_output_tokens: Some(4096),
            temperature: Some(1.1),
        };
        let settings = config.settings();
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert!(!settings.sanitize);
        assert_eq!(settings.max_output_tokens, Some(4096));
        assert_eq!(settings.temperature, Some(1.1));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = SimulationConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validation_rejects_wild_temperature() {
        let config = SimulationConfig {
            temperature: Some(3.5),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTemperature));
    }
}
