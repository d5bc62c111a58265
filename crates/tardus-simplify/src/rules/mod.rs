//! Simplification rules organized by variant.

pub(crate) mod division;
pub(crate) mod power;
pub(crate) mod product;
pub(crate) mod sum;
pub(crate) mod unary;

use tardus_core::{Expr, DEPTH_LIMIT};

/// Rewrites a tree into a typically smaller tree.
///
/// The walk is depth-first, children before parents, so a single call
/// suffices; callers must not loop it to a fixed point. The result is a
/// new tree and the input remains valid. Division rewrites follow
/// rational identities, which under floor semantics may change the
/// value of an inexact quotient chain; see the crate docs.
///
/// Simplification never fails: rules that would need to evaluate a
/// subtree (the parity probe on a power's exponent) are skipped when
/// evaluation errors, and the division rules only inspect literal
/// denominators structurally.
#[must_use]
pub fn simplify(expr: &Expr) -> Expr {
    apply(expr, DEPTH_LIMIT)
}

/// Dispatches the variant rules with a remaining depth budget.
///
/// When the budget is exhausted the subtree is returned unchanged; an
/// unchanged subtree is trivially equivalent, which keeps `simplify`
/// total on pathologically deep trees.
pub(crate) fn apply(expr: &Expr, depth: usize) -> Expr {
    let Some(depth) = depth.checked_sub(1) else {
        return expr.clone();
    };
    match expr {
        Expr::Literal(_) => expr.clone(),
        Expr::Neg(value) => unary::negation(value, depth),
        Expr::Abs(value) => unary::absolute(value, depth),
        Expr::Sum(_, _) => sum::rewrite(expr, depth),
        Expr::Product(left, right) => product::rewrite(left, right, depth),
        Expr::Pow { base, exp } => power::rewrite(base, exp, depth),
        Expr::FloorDiv { num, den } => division::rewrite(num, den, depth),
    }
}

/// Reassembles a term list into a left-nested binary tree.
///
/// Returns `None` for an empty list; callers supply the identity
/// element for their operation in that case.
pub(crate) fn left_fold(
    terms: Vec<Expr>,
    join: impl Fn(Expr, Expr) -> Expr,
) -> Option<Expr> {
    let mut terms = terms.into_iter();
    let first = terms.next()?;
    Some(terms.fold(first, join))
}
