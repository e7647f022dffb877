//! Safety limit configuration, source of the [`SafetyPolicy`].
//!
//! [`SafetyPolicy`]: crate::policy::SafetyPolicy

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::policy::SafetyPolicy;

use super::ConfigError;

/// Safety limit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum permitted leverage.
    #[serde(default = "default_max_leverage")]
    pub max_leverage: u32,
    /// Maximum risk-per-trade fraction of account equity, in (0, 1].
    #[serde(default = "default_max_risk_per_trade")]
    pub max_risk_per_trade: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_leverage: default_max_leverage(),
            max_risk_per_trade: default_max_risk_per_trade(),
        }
    }
}

impl LimitsConfig {
    /// Build the immutable policy snapshot injected into the validator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] when a limit is out of range
    /// or not representable as a decimal.
    pub fn to_policy(&self) -> Result<SafetyPolicy, ConfigError> {
        let fraction = Decimal::try_from(self.max_risk_per_trade).map_err(|e| {
            ConfigError::ValidationError(format!(
                "limits.max_risk_per_trade is not a valid decimal: {e}"
            ))
        })?;
        SafetyPolicy::new(self.max_leverage, fraction)
            .map_err(|e| ConfigError::ValidationError(format!("limits: {e}")))
    }
}

pub const fn default_max_leverage() -> u32 {
    10
}

pub const fn default_max_risk_per_trade() -> f64 {
    0.02
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limits_defaults() {
        let config = LimitsConfig::default();
        assert_eq!(config.max_leverage, 10);
        assert!((config.max_risk_per_trade - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_policy() {
        let policy = LimitsConfig::default().to_policy().unwrap();
        assert_eq!(policy.max_leverage(), 10);
        assert_eq!(policy.max_risk_per_trade(), dec!(0.02));
    }

    #[test]
    fn test_to_policy_rejects_bad_fraction() {
        let config = LimitsConfig {
            max_leverage: 10,
            max_risk_per_trade: 1.5,
        };
        let err = config.to_policy().unwrap_err();
        assert!(err.to_string().contains("max_risk_per_trade"));
    }

    #[test]
    fn test_to_policy_rejects_nan() {
        let config = LimitsConfig {
            max_leverage: 10,
            max_risk_per_trade: f64::NAN,
        };
        assert!(config.to_policy().is_err());
    }
}
