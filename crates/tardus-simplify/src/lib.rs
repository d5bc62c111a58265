//! # tardus-simplify
//!
//! Bounded term rewriting for Tardus expression trees.
//!
//! This crate rewrites a tree into a typically smaller tree using
//! local, variant-specific rules plus a shared associativity-flattening
//! step for sums and products.
//!
//! ## Rational identities, floor semantics
//!
//! The division and absolute-value rules use exact rational identities,
//! such as cross-multiplication of nested divisions. Under floor
//! semantics these can change the value of a tree whose intermediate
//! quotients are inexact; they can also make an unevaluable tree
//! evaluable by cancelling a zero denominator away. Rewriting is greedy
//! and deterministic: given the same tree it always produces the same
//! result, and applying it twice produces the same printed form as
//! applying it once.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rules;

#[cfg(test)]
mod proptests;

pub use rules::simplify;
