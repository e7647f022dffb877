//! Risk Gate Binary
//!
//! Thin operational wrapper around the risk-gate core: reads one
//! `PositionRequest` JSON document per stdin line and writes exactly one
//! decision JSON document per non-empty input line, so a line-oriented
//! upstream can pair inputs to outputs by index. Unusable input still
//! produces an output document carrying the error reason. Order submission
//! stays with the consumer of the output.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin risk-gate -- config.yaml < requests.jsonl
//! ```
//!
//! # Environment Variables
//!
//! - `RISK_GATE_CONFIG`: config file path (overridden by the CLI argument)
//! - `RUST_LOG`: log level (default: from config)

use std::io::{self, BufRead, Write};

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Serialize;

use risk_gate::config::{Config, ConfigError, load_config};
use risk_gate::models::{OrderParams, PositionRequest, ValidationResult};
use risk_gate::orders::derive_order_params;
use risk_gate::policy::{PolicyStore, SafetyPolicy};
use risk_gate::risk::{SizeOutcome, size_position, validate};
use risk_gate::telemetry;

/// One output line per non-empty request line.
///
/// Exactly one of `result` or `error` is present. `orders` and `sizing`
/// accompany approved results when the request carried the fields they
/// need.
#[derive(Debug, Serialize)]
struct Decision {
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orders: Option<OrderParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sizing: Option<SizeOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<DecisionError>,
}

/// Error body for requests that never reached a validation decision.
#[derive(Debug, Serialize)]
struct DecisionError {
    reason: &'static str,
    message: String,
}

impl Decision {
    fn error(symbol: Option<String>, reason: &'static str, message: String) -> Self {
        Self {
            symbol,
            result: None,
            orders: None,
            sizing: None,
            error: Some(DecisionError { reason, message }),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = resolve_config()?;
    telemetry::init_logging(&config.observability.logging);

    let policy_store = PolicyStore::new(config.limits.to_policy()?);
    let default_risk_percent = config.sizing.default_risk_percent_decimal()?;

    let policy = policy_store.snapshot();
    tracing::info!(
        max_leverage = policy.max_leverage(),
        max_risk_per_trade = %policy.max_risk_per_trade(),
        default_risk_percent = %default_risk_percent,
        "risk gate ready"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read request line")?;

        // Each request validates against the snapshot current at arrival.
        let policy = policy_store.snapshot();
        let Some(decision) = decide_line(&line, &policy, default_risk_percent) else {
            continue;
        };

        serde_json::to_writer(&mut stdout, &decision)?;
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

/// Produce the decision document for one input line.
///
/// Returns `None` only for blank lines; every other line yields a document,
/// so output stays in lockstep with input.
fn decide_line(
    line: &str,
    policy: &SafetyPolicy,
    default_risk_percent: Decimal,
) -> Option<Decision> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let request: PositionRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "unparseable request line");
            return Some(Decision::error(
                None,
                "MALFORMED_REQUEST",
                format!("unparseable request document: {e}"),
            ));
        }
    };

    let result = match validate(&request, policy) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(
                symbol = %request.symbol,
                reason = e.reason(),
                "rejecting malformed request: {e}"
            );
            return Some(Decision::error(Some(request.symbol), e.reason(), e.to_string()));
        }
    };

    // Audit trail for the logging collaborator: warnings never block
    // approval, rejections are expected outcomes rather than errors.
    for warning in &result.warnings {
        tracing::warn!(symbol = %request.symbol, code = warning.code.reason(), "{warning}");
    }
    if result.has_errors() {
        for violation in &result.errors {
            tracing::info!(symbol = %request.symbol, code = violation.code.reason(), "{violation}");
        }
    }

    let has_protective_fields = request.stop_loss_percent > Decimal::ZERO
        && request.take_profit_percent > Decimal::ZERO;

    let orders = if result.is_valid && has_protective_fields {
        match derive_order_params(&request, &result) {
            Ok(params) => Some(params),
            Err(e) => {
                tracing::error!(symbol = %request.symbol, reason = e.reason(), "{e}");
                return Some(Decision::error(Some(request.symbol), e.reason(), e.to_string()));
            }
        }
    } else {
        None
    };

    // Advisory maximum size at the configured default risk budget, for
    // approved requests that carry a stop distance.
    let sizing = if result.is_valid && request.stop_loss_percent > Decimal::ZERO {
        size_position(
            request.account_balance,
            default_risk_percent,
            request.stop_loss_percent,
        )
        .ok()
    } else {
        None
    };

    Some(Decision {
        symbol: Some(request.symbol),
        result: Some(result),
        orders,
        sizing,
        error: None,
    })
}

/// Resolve configuration from the CLI argument, `RISK_GATE_CONFIG`, or the
/// default path. A missing default file falls back to built-in defaults; an
/// explicitly named file must exist.
fn resolve_config() -> anyhow::Result<Config> {
    let explicit = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("RISK_GATE_CONFIG").ok());

    match explicit {
        Some(path) => {
            load_config(Some(&path)).with_context(|| format!("loading config from '{path}'"))
        }
        None => match load_config(None) {
            Ok(config) => Ok(config),
            Err(ConfigError::ReadError { .. }) => Ok(Config::default()),
            Err(e) => Err(e.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn policy() -> SafetyPolicy {
        SafetyPolicy::new(10, dec!(0.02)).unwrap()
    }

    fn approved_line() -> String {
        r#"{"symbol":"BTCUSDT","side":"LONG","leverage":5,"stop_loss_percent":"10","take_profit_percent":"15","order_value":"3","account_balance":"1000"}"#.to_string()
    }

    #[test]
    fn test_blank_line_yields_no_document() {
        assert!(decide_line("   ", &policy(), dec!(1)).is_none());
        assert!(decide_line("", &policy(), dec!(1)).is_none());
    }

    #[test]
    fn test_unparseable_line_yields_error_document() {
        let decision = decide_line("not json", &policy(), dec!(1)).unwrap();
        let error = decision.error.unwrap();
        assert_eq!(error.reason, "MALFORMED_REQUEST");
        assert!(decision.result.is_none());
        assert!(decision.symbol.is_none());
    }

    #[test]
    fn test_malformed_request_yields_error_document() {
        // Empty symbol fails validation's well-formedness check.
        let line = approved_line().replace("BTCUSDT", "");
        let decision = decide_line(&line, &policy(), dec!(1)).unwrap();
        let error = decision.error.unwrap();
        assert_eq!(error.reason, "MALFORMED_REQUEST");
        assert!(error.message.contains("symbol"));
    }

    #[test]
    fn test_output_stays_in_lockstep_with_input() {
        // A malformed line must still produce a document, or the consumer
        // pairs the next decision with the wrong request.
        let lines = [
            r#"{"symbol":""}"#.to_string(),
            approved_line(),
            String::new(),
        ];
        let decisions: Vec<_> = lines
            .iter()
            .filter_map(|l| decide_line(l, &policy(), dec!(1)))
            .collect();

        assert_eq!(decisions.len(), 2);
        assert!(decisions[0].error.is_some());
        assert!(decisions[1].result.as_ref().unwrap().is_valid);
        assert_eq!(decisions[1].symbol.as_deref(), Some("BTCUSDT"));
    }

    #[test]
    fn test_approved_decision_carries_orders_and_sizing() {
        let decision = decide_line(&approved_line(), &policy(), dec!(1)).unwrap();

        assert!(decision.error.is_none());
        let orders = decision.orders.unwrap();
        assert_eq!(orders.stop_loss.offset_percent, dec!(2));

        // 1000 * 1 / 100 = 10 at risk; 10 / 0.10 = 100 position
        let sizing = decision.sizing.unwrap();
        assert_eq!(sizing.risk_amount, dec!(10));
        assert_eq!(sizing.position_size, dec!(100));
    }

    #[test]
    fn test_rejected_decision_has_result_but_no_orders() {
        let line = approved_line().replace(r#""order_value":"3""#, r#""order_value":"500""#);
        let decision = decide_line(&line, &policy(), dec!(1)).unwrap();

        let result = decision.result.unwrap();
        assert!(!result.is_valid);
        assert!(decision.orders.is_none());
        assert!(decision.sizing.is_none());
        assert!(decision.error.is_none());
    }
}
