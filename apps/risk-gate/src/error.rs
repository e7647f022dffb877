//! Error taxonomy for the risk gate.
//!
//! Only misuse of the API surface is an error here. Business rejections
//! (leverage cap, risk budget) are a frequent, expected control path that
//! callers branch on; they are returned as [`RuleViolation`] data inside a
//! [`ValidationResult`], never as `Err`.
//!
//! [`RuleViolation`]: crate::models::RuleViolation
//! [`ValidationResult`]: crate::models::ValidationResult

use thiserror::Error;

/// Fail-fast errors for malformed input or API misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskGateError {
    /// A numeric field is missing, zero where positive is required, or
    /// otherwise unusable. Programmer error upstream; fail fast.
    #[error("malformed request: field '{field}' {reason}")]
    MalformedRequest {
        /// Name of the offending request field.
        field: &'static str,
        /// Why the field is unusable.
        reason: String,
    },

    /// Order parameter derivation was attempted on a request that was never
    /// approved, or whose protective fields are absent. Programmer error.
    #[error("derivation precondition failed: {0}")]
    DerivationPreconditionFailed(String),
}

impl RiskGateError {
    /// Malformed-request constructor.
    #[must_use]
    pub fn malformed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedRequest {
            field,
            reason: reason.into(),
        }
    }

    /// Stable reason string for audit logs.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MalformedRequest { .. } => "MALFORMED_REQUEST",
            Self::DerivationPreconditionFailed(_) => "DERIVATION_PRECONDITION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = RiskGateError::malformed("account_balance", "must be positive");
        assert_eq!(
            err.to_string(),
            "malformed request: field 'account_balance' must be positive"
        );
        assert_eq!(err.reason(), "MALFORMED_REQUEST");
    }

    #[test]
    fn test_derivation_display() {
        let err = RiskGateError::DerivationPreconditionFailed("request was rejected".to_string());
        assert!(err.to_string().contains("request was rejected"));
        assert_eq!(err.reason(), "DERIVATION_PRECONDITION_FAILED");
    }
}
