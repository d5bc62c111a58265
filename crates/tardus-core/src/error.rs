//! Error taxonomy for evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating an expression, exactly or
/// under a modulus.
///
/// There is no internal recovery: every error surfaces to the caller.
/// A caller that wants to tolerate an unevaluable tree can simplify it
/// first; rewriting frequently removes conditions (a zero denominator,
/// a negative exponent) that were structurally present but never
/// mathematically reached.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A floor division's denominator evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A power's exponent evaluated to a negative integer; there are no
    /// rational-result semantics.
    #[error("negative exponent in integer power")]
    NegativeExponent,

    /// A power's exponent does not fit in a machine word, so the full
    /// value could never be materialized.
    #[error("exponent too large to evaluate exactly")]
    ExponentTooLarge,

    /// Modular reduction was requested with a modulus that is not a
    /// positive integer.
    #[error("modulus must be a positive integer")]
    NonPositiveModulus,

    /// The tree is nested more deeply than the recursion limit allows.
    #[error("expression nesting exceeds the depth limit")]
    TooDeep,
}
