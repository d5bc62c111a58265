//! Exact evaluation.

use num_traits::Zero;
use tardus_integers::Integer;

use crate::{EvalError, Expr, DEPTH_LIMIT};

impl Expr {
    /// Computes the exact integer value of this tree.
    ///
    /// All arithmetic is unbounded precision; floor division rounds
    /// toward negative infinity, so `(-7/2)` evaluates to `-4`.
    ///
    /// # Errors
    ///
    /// - [`EvalError::DivisionByZero`] if a denominator evaluates to zero.
    /// - [`EvalError::NegativeExponent`] if an exponent evaluates to a
    ///   negative integer.
    /// - [`EvalError::ExponentTooLarge`] if an exponent exceeds the
    ///   machine word.
    /// - [`EvalError::TooDeep`] if the tree is nested beyond
    ///   [`DEPTH_LIMIT`].
    pub fn eval(&self) -> Result<Integer, EvalError> {
        self.eval_depth(DEPTH_LIMIT)
    }

    pub(crate) fn eval_depth(&self, depth: usize) -> Result<Integer, EvalError> {
        let Some(depth) = depth.checked_sub(1) else {
            return Err(EvalError::TooDeep);
        };
        match self {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Neg(value) => Ok(-value.eval_depth(depth)?),
            Expr::Abs(value) => Ok(value.eval_depth(depth)?.abs()),
            Expr::Sum(left, right) => Ok(left.eval_depth(depth)? + right.eval_depth(depth)?),
            Expr::Product(left, right) => Ok(left.eval_depth(depth)? * right.eval_depth(depth)?),
            Expr::Pow { base, exp } => {
                let exp = exp.eval_depth(depth)?;
                if exp.is_negative() {
                    return Err(EvalError::NegativeExponent);
                }
                let exp = exp.to_usize().ok_or(EvalError::ExponentTooLarge)?;
                Ok(base.eval_depth(depth)?.pow(exp))
            }
            Expr::FloorDiv { num, den } => {
                let den = den.eval_depth(depth)?;
                if den.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(num.eval_depth(depth)?.div_floor(&den))
            }
        }
    }
}
