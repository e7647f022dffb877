//! Risk evaluation, safety validation, and position sizing.
//!
//! This module is the decision core of the gate. It is deterministic and
//! side-effect free: identical inputs always yield structurally identical
//! results, and nothing here performs I/O or reads ambient configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use risk_gate::{SafetyPolicy, validate};
//!
//! let policy = SafetyPolicy::new(10, dec!(0.02))?;
//! let result = validate(&request, &policy)?;
//!
//! if !result.is_valid {
//!     for violation in &result.errors {
//!         println!("rejected: {violation}");
//!     }
//! }
//! ```

mod evaluator;
mod sizing;
mod validator;

pub use evaluator::{RiskExposure, evaluate_exposure};
pub use sizing::{SizeOutcome, size_position};
pub use validator::validate;
