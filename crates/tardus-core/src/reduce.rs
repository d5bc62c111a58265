//! Modular reduction.
//!
//! Computes a tree's value modulo an externally supplied modulus
//! without necessarily computing the unreduced value. Reduction
//! distributes over the variants where that is sound (sums, products,
//! the base of a power) and falls back to full evaluation where it is
//! not (absolute values, floor divisions). The fallback can be as
//! expensive as `eval`; that is an accepted limitation, since no
//! distributive rule exists for those variants without modular-inverse
//! machinery.

use tardus_integers::{Integer, ModInt};

use crate::{EvalError, Expr, DEPTH_LIMIT};

impl Expr {
    /// Computes `eval(self) mod modulus` by distributive reduction.
    ///
    /// Per-variant rules:
    ///
    /// - `Literal` — the canonical non-negative residue.
    /// - `Neg` — the negated child residue. The result may be negative;
    ///   callers needing a canonical residue must re-reduce.
    /// - `Abs` — `abs(eval(child) mod m)`: the child is fully evaluated,
    ///   since absolute value does not distribute over residues.
    /// - `Sum`/`Product` — children reduced, combined, re-reduced.
    /// - `Pow` — modular exponentiation of the reduced base by the fully
    ///   evaluated exponent. The true exponent is required; unlike
    ///   [`Expr::eval`] it is consumed bit by bit, so there is no size
    ///   limit on it.
    /// - `FloorDiv` — full-evaluation fallback `eval(self) mod m`.
    ///
    /// # Errors
    ///
    /// - [`EvalError::NonPositiveModulus`] if `modulus < 1`.
    /// - Any error of [`Expr::eval`] raised by the full-evaluation
    ///   fallbacks, or by the exponent of a power.
    pub fn mod_reduce(&self, modulus: &Integer) -> Result<Integer, EvalError> {
        if modulus.signum() < 1 {
            return Err(EvalError::NonPositiveModulus);
        }
        self.mod_reduce_depth(modulus, DEPTH_LIMIT)
    }

    fn mod_reduce_depth(&self, modulus: &Integer, depth: usize) -> Result<Integer, EvalError> {
        let Some(depth) = depth.checked_sub(1) else {
            return Err(EvalError::TooDeep);
        };
        match self {
            Expr::Literal(value) => Ok(value.rem_euclid(modulus)),
            Expr::Neg(value) => Ok(-value.mod_reduce_depth(modulus, depth)?),
            Expr::Abs(value) => Ok(value.eval_depth(depth)?.rem_euclid(modulus).abs()),
            Expr::Sum(left, right) => {
                let left = left.mod_reduce_depth(modulus, depth)?;
                let right = right.mod_reduce_depth(modulus, depth)?;
                Ok((left + right).rem_euclid(modulus))
            }
            Expr::Product(left, right) => {
                let left = left.mod_reduce_depth(modulus, depth)?;
                let right = right.mod_reduce_depth(modulus, depth)?;
                Ok((left * right).rem_euclid(modulus))
            }
            Expr::Pow { base, exp } => {
                let exp = exp.eval_depth(depth)?;
                if exp.is_negative() {
                    return Err(EvalError::NegativeExponent);
                }
                let base = ModInt::new(base.mod_reduce_depth(modulus, depth)?, modulus.clone());
                Ok(base.pow(&exp).residue().clone())
            }
            Expr::FloorDiv { .. } => {
                // No distributive rule exists for floor division under a
                // modulus.
                Ok(self.eval_depth(depth)?.rem_euclid(modulus))
            }
        }
    }
}
