//! Logging setup for the risk-gate binary.
//!
//! The library never installs a subscriber; only the binary calls
//! [`init_logging`], once, before the first request is read.
//!
//! # Configuration
//!
//! - `observability.logging.level`: default level filter
//! - `observability.logging.format`: "json" or "pretty"
//! - `RUST_LOG`: overrides the configured level when set

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber from the logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level so operators can
/// raise verbosity without touching the config file.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.format == "pretty" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    }

    tracing::debug!(level = %config.level, format = %config.format, "logging initialized");
}
