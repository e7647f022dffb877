//! Core domain models for the risk gate.
//!
//! These types define the data structures exchanged with the upstream signal
//! pipeline (requests, decisions) and the downstream submission layer (order
//! parameters).

mod order;
mod request;
mod validation;

pub use order::{EntryParams, OrderParams, OrderSide, ProtectiveKind, ProtectiveParams};
pub use request::{PositionRequest, Side};
pub use validation::{
    RiskLevel, RuleViolation, ValidationResult, ViolationCode, ViolationSeverity,
};
