//! Safety validation of candidate positions against a policy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::RiskGateError;
use crate::models::{
    PositionRequest, RiskLevel, RuleViolation, ValidationResult, ViolationCode, ViolationSeverity,
};
use crate::policy::SafetyPolicy;

use super::evaluator::evaluate_exposure;

/// Risk-tier thresholds in percent of account balance.
///
/// Boundary semantics are strict greater-than at each step. The original
/// system left the inclusive/exclusive bounds ambiguous; this pins them as a
/// policy decision rather than guessing further intent.
const HIGH_RISK_PERCENT: Decimal = dec!(1.5);
const MEDIUM_RISK_PERCENT: Decimal = dec!(1.0);

/// Validate a candidate position against the safety policy.
///
/// Pure function: the decision depends only on the request and the supplied
/// policy snapshot. Business rejections (leverage cap, risk budget) come back
/// as error violations in the result, never as `Err`.
///
/// # Errors
///
/// Returns [`RiskGateError::MalformedRequest`] only for structurally
/// unusable requests.
pub fn validate(
    request: &PositionRequest,
    policy: &SafetyPolicy,
) -> Result<ValidationResult, RiskGateError> {
    let exposure = evaluate_exposure(request)?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if request.leverage > policy.max_leverage() {
        errors.push(RuleViolation {
            code: ViolationCode::LeverageExceeded,
            severity: ViolationSeverity::Error,
            message: format!(
                "Leverage {}x exceeds policy maximum {}x",
                request.leverage,
                policy.max_leverage()
            ),
            observed: format!("{}x", request.leverage),
            limit: format!("{}x", policy.max_leverage()),
        });
    }

    if exposure.risk_fraction > policy.max_risk_per_trade() {
        let limit_percent = policy.max_risk_per_trade() * Decimal::ONE_HUNDRED;
        errors.push(RuleViolation {
            code: ViolationCode::RiskBudgetExceeded,
            severity: ViolationSeverity::Error,
            message: format!(
                "Risk {:.2}% of account balance exceeds per-trade budget {:.2}%",
                exposure.risk_percent, limit_percent
            ),
            observed: format!("{:.4}%", exposure.risk_percent),
            limit: format!("{:.2}%", limit_percent),
        });
    }

    let mut risk_level = risk_tier(exposure.risk_percent);

    if request.stop_loss_percent <= Decimal::ZERO {
        // Absent stop never blocks approval, but an unprotected position is
        // high risk no matter how small the exposure.
        warnings.push(RuleViolation {
            code: ViolationCode::StopLossMissing,
            severity: ViolationSeverity::Warning,
            message: "No stop-loss distance requested; position is unprotected".to_string(),
            observed: format!("{}%", request.stop_loss_percent),
            limit: "> 0%".to_string(),
        });
        risk_level = RiskLevel::High;
    }

    let result = ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        risk_level,
        risk_percent: exposure.risk_percent,
    };

    tracing::debug!(
        symbol = %request.symbol,
        is_valid = result.is_valid,
        risk_level = ?result.risk_level,
        risk_percent = %result.risk_percent,
        "validated position request"
    );

    Ok(result)
}

/// Map risk percent to a tier, strict greater-than at each step.
fn risk_tier(risk_percent: Decimal) -> RiskLevel {
    if risk_percent > HIGH_RISK_PERCENT {
        RiskLevel::High
    } else if risk_percent > MEDIUM_RISK_PERCENT {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;
    use test_case::test_case;

    fn policy() -> SafetyPolicy {
        SafetyPolicy::new(10, dec!(0.02)).unwrap()
    }

    fn request(order_value: Decimal, leverage: u32, balance: Decimal) -> PositionRequest {
        PositionRequest {
            symbol: "BTCUSDT".to_string(),
            side: Side::Long,
            leverage,
            stop_loss_percent: dec!(10),
            take_profit_percent: dec!(15),
            order_value,
            account_balance: balance,
        }
    }

    #[test]
    fn test_risk_budget_rejection() {
        // 50 * 5 / 1000 = 0.25, far over the 0.02 budget
        let result = validate(&request(dec!(50), 5, dec!(1000)), &policy()).unwrap();

        assert!(!result.is_valid);
        assert!(result.has_violation(ViolationCode::RiskBudgetExceeded));
        assert_eq!(result.risk_percent, dec!(25));
        let message = &result.errors[0].message;
        assert!(message.to_lowercase().contains("risk"));
        assert!(message.contains("exceeds"));
    }

    #[test]
    fn test_approval_at_medium_tier() {
        // 3 * 5 / 1000 = 0.015 -> 1.5%, inside budget, Medium tier
        let result = validate(&request(dec!(3), 5, dec!(1000)), &policy()).unwrap();

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.risk_percent, dec!(1.5));
    }

    #[test]
    fn test_leverage_rejection() {
        let result = validate(&request(dec!(1), 15, dec!(1000)), &policy()).unwrap();

        assert!(!result.is_valid);
        assert!(result.has_violation(ViolationCode::LeverageExceeded));
        assert!(result.errors[0].message.to_lowercase().contains("leverage"));
    }

    #[test]
    fn test_leverage_rejection_is_unconditional() {
        // Tiny, well-protected position still fails once leverage is over cap.
        let mut req = request(dec!(0.01), 11, dec!(1_000_000));
        req.stop_loss_percent = dec!(1);
        let result = validate(&req, &policy()).unwrap();

        assert!(!result.is_valid);
        assert!(result.has_violation(ViolationCode::LeverageExceeded));
    }

    #[test]
    fn test_missing_stop_warns_and_forces_high() {
        let mut req = request(dec!(1), 5, dec!(1000)); // 0.5% -> Low otherwise
        req.stop_loss_percent = Decimal::ZERO;
        let result = validate(&req, &policy()).unwrap();

        assert!(result.is_valid);
        assert!(result.has_violation(ViolationCode::StopLossMissing));
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_negative_stop_also_warns() {
        let mut req = request(dec!(1), 5, dec!(1000));
        req.stop_loss_percent = dec!(-2);
        let result = validate(&req, &policy()).unwrap();

        assert!(result.is_valid);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_idempotence() {
        let req = request(dec!(3), 5, dec!(1000));
        let first = validate(&req, &policy()).unwrap();
        let second = validate(&req, &policy()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_request_is_err_not_rejection() {
        let err = validate(&request(Decimal::ZERO, 5, dec!(1000)), &policy()).unwrap_err();
        assert!(matches!(err, RiskGateError::MalformedRequest { .. }));
    }

    // Tier boundaries: strict greater-than at 1.0% and 1.5%.
    #[test_case(dec!(0.5) => RiskLevel::Low; "well below one percent")]
    #[test_case(dec!(1.0) => RiskLevel::Low; "exactly one percent stays low")]
    #[test_case(dec!(1.01) => RiskLevel::Medium; "just above one percent")]
    #[test_case(dec!(1.5) => RiskLevel::Medium; "exactly one point five stays medium")]
    #[test_case(dec!(1.51) => RiskLevel::High; "just above one point five")]
    #[test_case(dec!(25) => RiskLevel::High; "far above")]
    fn test_risk_tier(risk_percent: Decimal) -> RiskLevel {
        risk_tier(risk_percent)
    }
}
