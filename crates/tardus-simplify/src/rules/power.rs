//! Power rules.

use num_traits::Zero;
use tardus_core::Expr;
use tardus_integers::Integer;

use super::apply;

/// Simplifies a power.
///
/// Base `1` stays `1` whatever the exponent. Base `-1` folds according
/// to the exponent's parity, probed with a modular reduction by 2 so
/// the exponent never has to be materialized; if the probe cannot be
/// evaluated the power is left symbolic, since simplification must not
/// fail. Exponent `1` yields the base and exponent `0` yields `1`.
pub(crate) fn rewrite(base: &Expr, exp: &Expr, depth: usize) -> Expr {
    let base = apply(base, depth);
    let exp = apply(exp, depth);
    if base.is_one() {
        return base;
    }
    if is_negative_one(&base) {
        if let Ok(residue) = exp.mod_reduce(&Integer::new(2)) {
            return if residue.rem_euclid(&Integer::new(2)).is_zero() {
                Expr::literal(1)
            } else {
                base
            };
        }
    }
    if exp.is_one() {
        return base;
    }
    if exp.is_zero() {
        return Expr::literal(1);
    }
    // No other simplifications
    base.pow(exp)
}

fn is_negative_one(expr: &Expr) -> bool {
    matches!(expr, Expr::Literal(value) if *value == Integer::new(-1))
}
