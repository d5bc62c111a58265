//! Negation and absolute-value rules.

use tardus_core::Expr;

use super::apply;

/// Simplifies a negation: double negation cancels and a literal child
/// folds into a negative literal; anything else is re-wrapped.
pub(crate) fn negation(value: &Expr, depth: usize) -> Expr {
    match apply(value, depth) {
        Expr::Neg(inner) => *inner,
        Expr::Literal(v) => Expr::Literal(-v),
        other => -other,
    }
}

/// Simplifies an absolute value.
///
/// Absolute value is idempotent and folds a literal child to its
/// non-negative value. It drops a negation child and distributes over
/// floor divisions and products, re-simplifying the result. When no
/// rule applies the node is returned as it was, original child
/// included.
pub(crate) fn absolute(value: &Expr, depth: usize) -> Expr {
    match apply(value, depth) {
        simplified @ Expr::Abs(_) => simplified,
        Expr::Literal(v) => Expr::Literal(v.abs()),
        Expr::Neg(inner) => *inner,
        Expr::FloorDiv { num, den } => {
            apply(&Expr::floor_div((*num).abs(), (*den).abs()), depth)
        }
        Expr::Product(left, right) => {
            apply(&Expr::product((*left).abs(), (*right).abs()), depth)
        }
        _ => value.clone().abs(),
    }
}
