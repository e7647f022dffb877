//! Candidate position request supplied by the signal pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RiskGateError;

/// Direction of the candidate position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    /// Long position.
    Long,
    /// Short position.
    Short,
}

/// A proposed leveraged position, constructed per trading candidate.
///
/// Never persisted; the request lives for exactly one
/// validate-then-maybe-derive pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRequest {
    /// Instrument symbol (e.g. "BTCUSDT").
    pub symbol: String,
    /// Position direction.
    pub side: Side,
    /// Leverage multiplier (>= 1).
    pub leverage: u32,
    /// Nominal stop-loss distance as percent of entry price.
    /// Zero or negative means no stop was requested.
    pub stop_loss_percent: Decimal,
    /// Nominal take-profit distance as percent of entry price.
    pub take_profit_percent: Decimal,
    /// Quote-currency order value prior to leverage multiplication.
    pub order_value: Decimal,
    /// Account equity backing the position.
    pub account_balance: Decimal,
}

impl PositionRequest {
    /// Reject structurally unusable requests before any rule evaluation.
    ///
    /// A malformed request is a programmer error upstream, distinct from a
    /// normal business rejection.
    ///
    /// # Errors
    ///
    /// Returns [`RiskGateError::MalformedRequest`] when the symbol is empty,
    /// leverage is zero, or a monetary field is not strictly positive.
    pub fn ensure_well_formed(&self) -> Result<(), RiskGateError> {
        if self.symbol.trim().is_empty() {
            return Err(RiskGateError::malformed("symbol", "must not be empty"));
        }
        if self.leverage == 0 {
            return Err(RiskGateError::malformed("leverage", "must be at least 1"));
        }
        if self.order_value <= Decimal::ZERO {
            return Err(RiskGateError::malformed(
                "order_value",
                format!("must be positive, got {}", self.order_value),
            ));
        }
        if self.account_balance <= Decimal::ZERO {
            return Err(RiskGateError::malformed(
                "account_balance",
                format!("must be positive, got {}", self.account_balance),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> PositionRequest {
        PositionRequest {
            symbol: "BTCUSDT".to_string(),
            side: Side::Long,
            leverage: 5,
            stop_loss_percent: dec!(2),
            take_profit_percent: dec!(4),
            order_value: dec!(100),
            account_balance: dec!(10000),
        }
    }

    #[test]
    fn test_well_formed_request_passes() {
        assert!(request().ensure_well_formed().is_ok());
    }

    #[test]
    fn test_empty_symbol_is_malformed() {
        let mut req = request();
        req.symbol = "  ".to_string();
        let err = req.ensure_well_formed().unwrap_err();
        assert!(matches!(
            err,
            RiskGateError::MalformedRequest { field: "symbol", .. }
        ));
    }

    #[test]
    fn test_zero_leverage_is_malformed() {
        let mut req = request();
        req.leverage = 0;
        assert!(req.ensure_well_formed().is_err());
    }

    #[test]
    fn test_non_positive_balance_is_malformed() {
        let mut req = request();
        req.account_balance = Decimal::ZERO;
        let err = req.ensure_well_formed().unwrap_err();
        assert!(err.to_string().contains("account_balance"));
    }

    #[test]
    fn test_non_positive_order_value_is_malformed() {
        let mut req = request();
        req.order_value = dec!(-5);
        assert!(req.ensure_well_formed().is_err());
    }

    #[test]
    fn test_side_serde_round_trip() {
        let json = serde_json::to_string(&Side::Short).unwrap();
        assert_eq!(json, "\"SHORT\"");
        let side: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(side, Side::Short);
    }
}
