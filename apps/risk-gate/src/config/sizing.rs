//! Position sizer configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Position sizer defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Risk budget percentage the binary sizes approved requests at when the
    /// pipeline does not supply its own budget.
    #[serde(default = "default_risk_percent")]
    pub default_risk_percent: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            default_risk_percent: default_risk_percent(),
        }
    }
}

impl SizingConfig {
    /// The default risk budget as a decimal percentage, ready for
    /// [`size_position`].
    ///
    /// [`size_position`]: crate::risk::size_position
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] when the configured value is
    /// not representable as a decimal.
    pub fn default_risk_percent_decimal(&self) -> Result<Decimal, ConfigError> {
        Decimal::try_from(self.default_risk_percent).map_err(|e| {
            ConfigError::ValidationError(format!(
                "sizing.default_risk_percent is not a valid decimal: {e}"
            ))
        })
    }
}

const fn default_risk_percent() -> f64 {
    1.0
}
