//! Notional exposure and risk fraction calculation.

use rust_decimal::Decimal;

use crate::error::RiskGateError;
use crate::models::PositionRequest;

/// Exposure figures for one candidate position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskExposure {
    /// Notional exposure: order value multiplied by leverage.
    pub notional: Decimal,
    /// Proportion of account equity exposed by this position.
    pub risk_fraction: Decimal,
    /// `risk_fraction` expressed as a percentage.
    pub risk_percent: Decimal,
}

/// Compute notional exposure and risk fraction for a candidate.
///
/// Formula: `risk_fraction = order_value * leverage / account_balance`.
/// The order value already reflects exposure prior to leverage
/// multiplication, so leverage enters the risk formula exactly once.
///
/// # Errors
///
/// Returns [`RiskGateError::MalformedRequest`] for structurally unusable
/// requests; see [`PositionRequest::ensure_well_formed`].
pub fn evaluate_exposure(request: &PositionRequest) -> Result<RiskExposure, RiskGateError> {
    request.ensure_well_formed()?;

    let notional = request.order_value * Decimal::from(request.leverage);
    let risk_fraction = notional / request.account_balance;

    Ok(RiskExposure {
        notional,
        risk_fraction,
        risk_percent: risk_fraction * Decimal::ONE_HUNDRED,
    })
}
