//! # tardus-integers
//!
//! Exact integer arithmetic for the Tardus expression engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) with floor-division semantics
//! - Modular arithmetic with a runtime modulus (`ModInt`)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated with GMP-like performance

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::ModInt;
