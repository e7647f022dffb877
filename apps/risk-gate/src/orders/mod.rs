//! Protective order parameter derivation for approved requests.

mod derive;

pub use derive::derive_order_params;
