//! Sum rules: associativity flattening and literal folding.

use num_traits::Zero;
use tardus_core::Expr;
use tardus_integers::Integer;

use super::{apply, left_fold};

/// Flattens all transitively nested sum children into one ordered list,
/// simplifies each, folds the literals into a single one by addition,
/// and reassembles.
///
/// A summand may itself simplify into a sum (dropping a `*1` wrapper,
/// say); its terms are spliced into the list rather than kept nested,
/// so the reassembled tree is a fixed point of this rule.
///
/// The folded literal is dropped when it is zero; otherwise it goes
/// last, after the non-literal terms in their original relative order.
/// An all-literal sum folding to zero yields `0` itself.
pub(crate) fn rewrite(expr: &Expr, depth: usize) -> Expr {
    let mut folded = Integer::zero();
    let mut terms: Vec<Expr> = Vec::new();
    for summand in expr.summands() {
        let simplified = apply(summand, depth);
        for term in simplified.summands() {
            match term {
                Expr::Literal(value) => folded = folded + value,
                other => terms.push(other.clone()),
            }
        }
    }
    if !folded.is_zero() || terms.is_empty() {
        terms.push(Expr::Literal(folded));
    }
    match left_fold(terms, Expr::sum) {
        Some(expr) => expr,
        None => Expr::literal(0), // empty sum
    }
}
