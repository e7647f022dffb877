//! Safety policy value and snapshot store.
//!
//! The policy is the only shared state in the gate. It is loaded once from
//! configuration before first use and is write-never thereafter: live reload
//! swaps a fresh immutable snapshot, it never mutates fields in place.

use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors constructing a [`SafetyPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Maximum leverage must be at least 1.
    #[error("max_leverage must be at least 1, got {0}")]
    InvalidMaxLeverage(u32),
    /// Risk-per-trade fraction must be in (0, 1].
    #[error("max_risk_per_trade must be in (0, 1], got {0}")]
    InvalidRiskFraction(Decimal),
}

/// Process-wide safety limits, immutable for the life of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyPolicy {
    max_leverage: u32,
    max_risk_per_trade: Decimal,
}

impl SafetyPolicy {
    /// Construct a policy, validating both limits.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] when `max_leverage` is zero or
    /// `max_risk_per_trade` falls outside `(0, 1]`.
    pub fn new(max_leverage: u32, max_risk_per_trade: Decimal) -> Result<Self, PolicyError> {
        if max_leverage == 0 {
            return Err(PolicyError::InvalidMaxLeverage(max_leverage));
        }
        if max_risk_per_trade <= Decimal::ZERO || max_risk_per_trade > Decimal::ONE {
            return Err(PolicyError::InvalidRiskFraction(max_risk_per_trade));
        }
        Ok(Self {
            max_leverage,
            max_risk_per_trade,
        })
    }

    /// Maximum permitted leverage.
    #[must_use]
    pub const fn max_leverage(&self) -> u32 {
        self.max_leverage
    }

    /// Maximum permitted risk fraction of account equity per trade.
    #[must_use]
    pub const fn max_risk_per_trade(&self) -> Decimal {
        self.max_risk_per_trade
    }
}

/// Shared holder for the current policy snapshot.
///
/// Readers take a cheap `Arc` clone and evaluate against that snapshot for
/// the whole request; a concurrent [`PolicyStore::swap`] never affects an
/// in-flight validation.
#[derive(Debug)]
pub struct PolicyStore {
    current: RwLock<Arc<SafetyPolicy>>,
}

impl PolicyStore {
    /// Create a store with an initial policy.
    #[must_use]
    pub fn new(policy: SafetyPolicy) -> Self {
        Self {
            current: RwLock::new(Arc::new(policy)),
        }
    }

    /// Current policy snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<SafetyPolicy> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the policy with a fresh snapshot, returning the previous one.
    pub fn swap(&self, policy: SafetyPolicy) -> Arc<SafetyPolicy> {
        let next = Arc::new(policy);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}
