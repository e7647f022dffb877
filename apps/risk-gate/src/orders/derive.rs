//! Translation of an approved request into exchange-ready order specs.

use rust_decimal::Decimal;

use crate::error::RiskGateError;
use crate::models::{
    EntryParams, OrderParams, OrderSide, PositionRequest, ProtectiveKind, ProtectiveParams,
    ValidationResult,
};

/// Derive entry and protective order parameters for an approved request.
///
/// Protective distances are scaled by leverage so the dollar risk per unit
/// of leverage stays constant: a nominal 2% stop at 5x leverage realizes a
/// 0.4% price move, which liquidates the same absolute risk budget as a 2%
/// move would unleveraged.
///
/// # Errors
///
/// Returns [`RiskGateError::DerivationPreconditionFailed`] when the
/// validation result is not approved, or when a protective distance is
/// absent. Both are API misuse: callers must branch on
/// [`ValidationResult::is_valid`] first.
pub fn derive_order_params(
    request: &PositionRequest,
    validation: &ValidationResult,
) -> Result<OrderParams, RiskGateError> {
    if !validation.is_valid {
        return Err(RiskGateError::DerivationPreconditionFailed(format!(
            "request for {} was rejected; derivation requires an approved result",
            request.symbol
        )));
    }
    if request.stop_loss_percent <= Decimal::ZERO {
        return Err(RiskGateError::DerivationPreconditionFailed(
            "stop_loss_percent is absent; protective orders cannot be derived".to_string(),
        ));
    }
    if request.take_profit_percent <= Decimal::ZERO {
        return Err(RiskGateError::DerivationPreconditionFailed(
            "take_profit_percent is absent; protective orders cannot be derived".to_string(),
        ));
    }

    let entry_side = OrderSide::entry_for(request.side);
    let exit_side = entry_side.opposite();
    let leverage = Decimal::from(request.leverage);

    let params = OrderParams {
        entry: EntryParams {
            symbol: request.symbol.clone(),
            side: entry_side,
            order_value: request.order_value,
            leverage: request.leverage,
        },
        stop_loss: ProtectiveParams {
            kind: ProtectiveKind::StopLoss,
            side: exit_side,
            offset_percent: request.stop_loss_percent / leverage,
        },
        take_profit: ProtectiveParams {
            kind: ProtectiveKind::TakeProfit,
            side: exit_side,
            offset_percent: request.take_profit_percent / leverage,
        },
    };

    tracing::debug!(
        symbol = %request.symbol,
        stop_offset = %params.stop_loss.offset_percent,
        target_offset = %params.take_profit.offset_percent,
        "derived protective order parameters"
    );

    Ok(params)
}
