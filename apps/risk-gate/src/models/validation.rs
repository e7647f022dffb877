//! Validation decision types.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Risk tier for an approved or rejected candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Risk below 1% of account balance.
    Low,
    /// Risk above 1% and up to 1.5% of account balance.
    Medium,
    /// Risk above 1.5% of account balance, or no stop-loss requested.
    High,
}

/// Violation severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationSeverity {
    /// Warning - surfaced for audit, never blocks approval.
    Warning,
    /// Error - the request must be rejected.
    Error,
}

/// Stable codes for rule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    /// Requested leverage exceeds the policy maximum.
    LeverageExceeded,
    /// Risk fraction exceeds the policy per-trade budget.
    RiskBudgetExceeded,
    /// No stop-loss distance was requested.
    StopLossMissing,
}

impl ViolationCode {
    /// Stable reason string for logs and downstream consumers.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::LeverageExceeded => "LEVERAGE_EXCEEDED",
            Self::RiskBudgetExceeded => "RISK_BUDGET_EXCEEDED",
            Self::StopLossMissing => "STOP_LOSS_MISSING",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A single rule violation raised during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    /// Violation code.
    pub code: ViolationCode,
    /// Violation severity.
    pub severity: ViolationSeverity,
    /// Human-readable message.
    pub message: String,
    /// Observed value that triggered the rule.
    pub observed: String,
    /// Configured limit, empty when not applicable.
    pub limit: String,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Outcome of validating one [`PositionRequest`] against a policy.
///
/// Produced fresh per request and immutable once returned. Identical inputs
/// always produce a structurally identical result.
///
/// [`PositionRequest`]: crate::models::PositionRequest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the position may be opened.
    pub is_valid: bool,
    /// Error-severity violations (empty when `is_valid`).
    pub errors: Vec<RuleViolation>,
    /// Warning-severity violations; never block approval.
    pub warnings: Vec<RuleViolation>,
    /// Risk tier for the candidate.
    pub risk_level: RiskLevel,
    /// Calculated risk as percent of account balance.
    pub risk_percent: Decimal,
}

impl ValidationResult {
    /// Returns true if any error-severity violation is present.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors
            .iter()
            .any(|v| v.severity == ViolationSeverity::Error)
    }

    /// Returns true if a violation with the given code is present, at either
    /// severity.
    #[must_use]
    pub fn has_violation(&self, code: ViolationCode) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|v| v.code == code)
    }
}
