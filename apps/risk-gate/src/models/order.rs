//! Exchange-ready order parameter specs.
//!
//! These are transport-agnostic: offsets are expressed as percentage moves
//! from the (still unknown) entry price. The out-of-scope submission layer
//! turns them into whatever order shape its exchange needs and owns all
//! exchange-side errors and retries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::request::Side;

/// Execution side of a concrete order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

impl OrderSide {
    /// Entry side for a position direction.
    #[must_use]
    pub const fn entry_for(side: Side) -> Self {
        match side {
            Side::Long => Self::Buy,
            Side::Short => Self::Sell,
        }
    }

    /// Opposite side, used for protective exits.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

/// Kind of protective order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtectiveKind {
    /// Stop-loss exit.
    StopLoss,
    /// Take-profit exit.
    TakeProfit,
}

/// Entry order parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryParams {
    /// Instrument symbol.
    pub symbol: String,
    /// Entry execution side.
    pub side: OrderSide,
    /// Quote-currency order value (margin, prior to leverage).
    pub order_value: Decimal,
    /// Leverage multiplier to set before entry.
    pub leverage: u32,
}

/// Protective order parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectiveParams {
    /// Stop-loss or take-profit.
    pub kind: ProtectiveKind,
    /// Exit execution side (opposite of the entry side).
    pub side: OrderSide,
    /// Realized trigger distance as percent of entry price, already scaled
    /// by leverage so dollar risk matches the nominal distance.
    pub offset_percent: Decimal,
}

/// Complete order parameter set for an approved request.
///
/// Derivable only from a request whose [`ValidationResult`] is approved.
///
/// [`ValidationResult`]: crate::models::ValidationResult
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderParams {
    /// Entry order spec.
    pub entry: EntryParams,
    /// Stop-loss spec.
    pub stop_loss: ProtectiveParams,
    /// Take-profit spec.
    pub take_profit: ProtectiveParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_side_mapping() {
        assert_eq!(OrderSide::entry_for(Side::Long), OrderSide::Buy);
        assert_eq!(OrderSide::entry_for(Side::Short), OrderSide::Sell);
    }

    #[test]
    fn test_opposite_side() {
        assert_eq!(OrderSide::Buy.opposite(), OrderSide::Sell);
        assert_eq!(OrderSide::Sell.opposite(), OrderSide::Buy);
    }

    #[test]
    fn test_protective_kind_serde() {
        let json = serde_json::to_string(&ProtectiveKind::StopLoss).unwrap();
        assert_eq!(json, "\"STOP_LOSS\"");
    }
}
