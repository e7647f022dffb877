//! Configuration module for the risk gate.
//!
//! Loads the safety limits, sizing defaults, and logging settings from a
//! YAML file with environment variable interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use risk_gate::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//! let policy = config.limits.to_policy()?;
//! ```

mod limits;
mod observability;
mod sizing;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use limits::LimitsConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use sizing::SizingConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Safety limits, source of the policy snapshot.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Position sizer defaults.
    #[serde(default)]
    pub sizing: SizingConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Load configuration from a YAML file with environment variable
/// interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. A missing or empty
/// variable without a default becomes the empty string.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let fallback = caps
            .get(2)
            .map_or_else(String::new, |m| m.as_str().to_string());
        caps.get(1)
            .and_then(|name| std::env::var(name.as_str()).ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback)
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.limits.max_leverage == 0 {
        return Err(ConfigError::ValidationError(
            "limits.max_leverage must be at least 1".to_string(),
        ));
    }

    // NaN slips past range comparisons, so finiteness is checked first.
    if !config.limits.max_risk_per_trade.is_finite()
        || config.limits.max_risk_per_trade <= 0.0
        || config.limits.max_risk_per_trade > 1.0
    {
        return Err(ConfigError::ValidationError(
            "limits.max_risk_per_trade must be in (0, 1]".to_string(),
        ));
    }

    if !config.sizing.default_risk_percent.is_finite()
        || config.sizing.default_risk_percent <= 0.0
    {
        return Err(ConfigError::ValidationError(
            "sizing.default_risk_percent must be positive and finite".to_string(),
        ));
    }

    let valid_formats = ["json", "pretty"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}
