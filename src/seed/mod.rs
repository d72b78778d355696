//! Seed derivation and parameter extraction
//!
//! This module turns an opaque capture payload into generator inputs:
//! - A 53-bit seed from a two-lane mixing hash
//! - Nine normalized fields sliced from the seed's decimal digits

/// Two-lane 53-bit payload hash
pub mod hash;
/// Decimal-window parameter extraction
pub mod parameters;

pub use hash::{derive_seed, derive_seed_str};
pub use parameters::{ParameterSet, extract_parameters};
