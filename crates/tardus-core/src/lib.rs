//! # tardus-core
//!
//! Expression trees for the Tardus delayed-evaluation engine.
//!
//! This crate provides:
//! - The closed set of expression node types (`Expr`)
//! - Exact evaluation with floor-division semantics
//! - Modular reduction against an external modulus
//! - The canonical parenthesized text form
//!
//! ## Design Principles
//!
//! - **Immutable trees**: every child is exclusively owned and never
//!   mutated; rewrites build new trees
//! - **Exact arithmetic**: all values are arbitrary precision, there is
//!   no overflow condition
//! - **Pure functions**: evaluation and reduction have no side effects
//!   and no caches

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod expr;

mod display;
mod eval;
mod reduce;

pub use error::EvalError;
pub use expr::Expr;

/// Maximum recursion depth for `eval` and `mod_reduce`.
///
/// Recursion depth equals tree depth, so this bounds the call stack for
/// pathologically deep trees instead of letting them overflow it.
pub const DEPTH_LIMIT: usize = 1000;
