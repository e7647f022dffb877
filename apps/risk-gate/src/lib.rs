// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::default_trait_access
    )
)]

//! Risk Gate - Pre-Trade Risk Core Library
//!
//! Deterministic pre-trade risk validation and protective-order-parameter
//! derivation for leveraged positions.
//!
//! # Pipeline
//!
//! An upstream signal pipeline hands the gate one [`PositionRequest`] per
//! trading candidate. The gate decides synchronously whether the position may
//! be opened and, for approved candidates, computes the stop-loss and
//! take-profit parameters that must accompany the entry at the exchange:
//!
//! ```text
//! PolicyStore -> RiskExposure -> validate() -> derive_order_params()
//!                                          \-> size_position()
//! ```
//!
//! Per-request lifecycle is strictly linear: a request is created, validated
//! exactly once, and (if approved) derived into [`OrderParams`]. There are no
//! retries and no suspended intermediate states.
//!
//! Everything here is a pure function over immutable inputs: no I/O, no shared
//! mutable state, no ambient configuration reads. The only shared value is the
//! [`SafetyPolicy`], which is loaded once from configuration and swapped as an
//! immutable snapshot if reloaded (see [`PolicyStore`]).
//!
//! Order submission, exchange connectivity, and position lifecycle tracking
//! are downstream collaborators and deliberately absent.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Configuration loading and validation.
pub mod config;

/// Error taxonomy for the risk gate.
pub mod error;

/// Request, decision, and order parameter models.
pub mod models;

/// Protective order parameter derivation.
pub mod orders;

/// Safety policy value and snapshot store.
pub mod policy;

/// Risk evaluation, validation, and position sizing.
pub mod risk;

/// Logging setup for the binary.
pub mod telemetry;

pub use config::{Config, ConfigError, load_config, load_config_from_string};
pub use error::RiskGateError;
pub use models::{
    EntryParams, OrderParams, OrderSide, PositionRequest, ProtectiveKind, ProtectiveParams,
    RiskLevel, RuleViolation, Side, ValidationResult, ViolationCode, ViolationSeverity,
};
pub use orders::derive_order_params;
pub use policy::{PolicyError, PolicyStore, SafetyPolicy};
pub use risk::{RiskExposure, SizeOutcome, evaluate_exposure, size_position, validate};
