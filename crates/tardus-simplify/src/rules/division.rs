//! Floor-division rules: nested-division rewrites and literal factor
//! cancellation.

use num_traits::One;
use tardus_core::Expr;
use tardus_integers::Integer;

use super::{apply, left_fold};

/// Simplifies a floor division.
///
/// A denominator of `1` yields the numerator and a numerator of `0`
/// yields `0`. Nested divisions are rewritten rationally —
/// `a / (c/d)` becomes `a * (d/c)` and `(a/b) / c` becomes
/// `a / (b*c)` — and simplified again. Otherwise literal factors of
/// the numerator and denominator are cancelled pairwise by their GCD.
///
/// Only literal denominators are inspected structurally; nothing is
/// evaluated, so this rule never divides by zero even when the tree
/// would.
pub(crate) fn rewrite(num: &Expr, den: &Expr, depth: usize) -> Expr {
    let num = apply(num, depth);
    let den = apply(den, depth);
    if den.is_one() {
        return num;
    }
    if num.is_zero() {
        return num;
    }
    if let Expr::FloorDiv { num: dn, den: dd } = den {
        return apply(&Expr::product(num, Expr::floor_div(*dd, *dn)), depth);
    }
    if let Expr::FloorDiv { num: nn, den: nd } = num {
        return apply(&Expr::floor_div(*nn, Expr::product(*nd, den)), depth);
    }
    cancel_literal_factors(num, den, depth)
}

/// Pairwise GCD cancellation between the literal factors of the
/// numerator and denominator.
///
/// Both sides are decomposed into their flat factor lists (a bare
/// literal counts as a singleton; any other non-product numerator
/// exposes nothing to cancel). Every (numerator, denominator) literal
/// pair is reduced by its current GCD, in list order. The sides are
/// then reconstituted — reduced literals first, remaining factors in
/// their original relative order — and the division collapses to the
/// numerator when the denominator has been cancelled down to `1`.
fn cancel_literal_factors(num: Expr, den: Expr, depth: usize) -> Expr {
    if !matches!(num, Expr::Product(_, _) | Expr::Literal(_)) {
        return Expr::floor_div(num, den);
    }
    let (mut num_literals, num_rest) = split_literals(&num);
    let (mut den_literals, den_rest) = split_literals(&den);

    for i in 0..num_literals.len() {
        for j in 0..den_literals.len() {
            let d = num_literals[i].gcd(&den_literals[j]);
            if d > Integer::one() {
                num_literals[i] = num_literals[i].div_floor(&d);
                den_literals[j] = den_literals[j].div_floor(&d);
            }
        }
    }

    let num = reassemble(num_literals, num_rest, depth);
    let den = reassemble(den_literals, den_rest, depth);
    if den.is_one() {
        return num;
    }
    Expr::floor_div(num, den)
}

/// Splits a node's flat factor list into literal values and the
/// remaining factors, each in original order.
fn split_literals(expr: &Expr) -> (Vec<Integer>, Vec<Expr>) {
    let mut literals = Vec::new();
    let mut rest = Vec::new();
    for factor in expr.factors() {
        match factor {
            Expr::Literal(value) => literals.push(value.clone()),
            other => rest.push(other.clone()),
        }
    }
    (literals, rest)
}

fn reassemble(literals: Vec<Integer>, rest: Vec<Expr>, depth: usize) -> Expr {
    let factors: Vec<Expr> = literals
        .into_iter()
        .map(Expr::Literal)
        .chain(rest)
        .collect();
    match left_fold(factors, Expr::product) {
        Some(expr) => apply(&expr, depth),
        None => Expr::literal(1), // empty product
    }
}
