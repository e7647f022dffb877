//! Maximum safe position size from a risk budget and stop distance.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::RiskGateError;

/// Result of a position sizing calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOutcome {
    /// Maximum position size in quote currency.
    pub position_size: Decimal,
    /// Amount of equity put at risk.
    pub risk_amount: Decimal,
    /// Worst-case loss if the stop is hit; equals `risk_amount`.
    pub max_loss: Decimal,
}

/// Compute the maximum position size for a given risk budget.
///
/// Formula:
/// - `risk_amount = account_balance * risk_percentage / 100`
/// - `position_size = risk_amount / (stop_loss_distance / 100)`
///
/// Monetary outputs are rounded to two decimals, round-half-up, so results
/// are deterministic regardless of input scale.
///
/// Operates independently of leverage and policy checks; usable upstream of,
/// or instead of, [`validate`].
///
/// [`validate`]: crate::risk::validate
///
/// # Errors
///
/// Returns [`RiskGateError::MalformedRequest`] when any input is not
/// strictly positive.
pub fn size_position(
    account_balance: Decimal,
    risk_percentage: Decimal,
    stop_loss_distance: Decimal,
) -> Result<SizeOutcome, RiskGateError> {
    if account_balance <= Decimal::ZERO {
        return Err(RiskGateError::malformed(
            "account_balance",
            format!("must be positive, got {account_balance}"),
        ));
    }
    if risk_percentage <= Decimal::ZERO {
        return Err(RiskGateError::malformed(
            "risk_percentage",
            format!("must be positive, got {risk_percentage}"),
        ));
    }
    if stop_loss_distance <= Decimal::ZERO {
        return Err(RiskGateError::malformed(
            "stop_loss_distance",
            format!("must be positive, got {stop_loss_distance}"),
        ));
    }

    let risk_amount = round_money(account_balance * risk_percentage / Decimal::ONE_HUNDRED);
    let position_size = round_money(risk_amount / (stop_loss_distance / Decimal::ONE_HUNDRED));

    Ok(SizeOutcome {
        position_size,
        risk_amount,
        max_loss: risk_amount,
    })
}

/// Two-decimal round-half-up.
fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
