//! Configuration for anomaly detection

use serde::{Deserialize, Serialize};

use crate::core::{FlowError, FlowResult};

/// Lower bound of the multiplier range a UI slider exposes
pub const UI_MIN_MULTIPLIER: f64 = 1.0;
/// Upper bound of the multiplier range a UI slider exposes
pub const UI_MAX_MULTIPLIER: f64 = 10.0;

/// Anomaly threshold configuration
///
/// A contract is flagged when its volume exceeds `baseline_volume *
/// volume_multiplier` or its open interest exceeds `baseline_open_interest *
/// open_interest_multiplier`. The algorithm only requires positivity; the UI
/// domain is 1.0-10.0. Multipliers at or below 1.0 flag everything at or
/// above average, which is legal but noisy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Multiplier applied to the chain-wide average volume
    pub volume_multiplier: f64,
    /// Multiplier applied to the chain-wide average open interest
    pub open_interest_multiplier: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            volume_multiplier: 2.0,
            open_interest_multiplier: 2.0,
        }
    }
}

impl ThresholdConfig {
    /// Same multiplier for both conditions (the single-slider setup)
    pub fn uniform(multiplier: f64) -> Self {
        Self {
            volume_multiplier: multiplier,
            open_interest_multiplier: multiplier,
        }
    }

    /// Aggressive settings: lower thresholds, more anomalies
    pub fn aggressive() -> Self {
        Self::uniform(1.5)
    }

    /// Conservative settings: higher thresholds, fewer anomalies
    pub fn conservative() -> Self {
        Self::uniform(3.0)
    }

    /// Check that both multipliers are positive
    pub fn validate(&self) -> FlowResult<()> {
        if !(self.volume_multiplier > 0.0) {
            return Err(FlowError::invalid_configuration(format!(
                "volume multiplier must be positive, got {}",
                self.volume_multiplier
            )));
        }
        if !(self.open_interest_multiplier > 0.0) {
            return Err(FlowError::invalid_configuration(format!(
                "open interest multiplier must be positive, got {}",
                self.open_interest_multiplier
            )));
        }
        Ok(())
    }

    /// Clamp both multipliers into the UI slider range
    pub fn clamped_to_ui(self) -> Self {
        Self {
            volume_multiplier: self
                .volume_multiplier
                .clamp(UI_MIN_MULTIPLIER, UI_MAX_MULTIPLIER),
            open_interest_multiplier: self
                .open_interest_multiplier
                .clamp(UI_MIN_MULTIPLIER, UI_MAX_MULTIPLIER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_uniform_two() {
        let d = ThresholdConfig::default();
        assert_eq!(d.volume_multiplier, 2.0);
        assert_eq!(d.open_interest_multiplier, 2.0);
    }

    #[test]
    fn test_validate_rejects_zero_and_negative() {
        assert!(ThresholdConfig::uniform(0.0).validate().is_err());
        assert!(ThresholdConfig::uniform(-1.0).validate().is_err());
        assert!(ThresholdConfig::uniform(f64::NAN).validate().is_err());
        assert!(ThresholdConfig::uniform(0.5).validate().is_ok());
    }

    #[test]
    fn test_validate_checks_each_multiplier() {
        let cfg = ThresholdConfig {
            volume_multiplier: 2.0,
            open_interest_multiplier: 0.0,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_clamped_to_ui() {
        let cfg = ThresholdConfig::uniform(0.2).clamped_to_ui();
        assert_eq!(cfg.volume_multiplier, UI_MIN_MULTIPLIER);

        let cfg = ThresholdConfig::uniform(25.0).clamped_to_ui();
        assert_eq!(cfg.open_interest_multiplier, UI_MAX_MULTIPLIER);
    }
}
