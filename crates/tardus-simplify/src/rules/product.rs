//! Product rules: identities, annihilator, and division
//! cross-multiplication.

use tardus_core::Expr;

use super::apply;

/// Simplifies a product of two operands.
///
/// Multiplying by one returns the other operand; multiplying by zero
/// returns zero. A floor-division operand is absorbed by
/// cross-multiplication — `(a/b)*(c/d)` becomes `(a*c)/(b*d)` and the
/// mixed shapes become `(a*c)/b` — and the resulting division is
/// simplified again. Otherwise the product of the simplified operands
/// is returned unchanged.
pub(crate) fn rewrite(left: &Expr, right: &Expr, depth: usize) -> Expr {
    let left = apply(left, depth);
    let right = apply(right, depth);
    if left.is_one() {
        return right;
    }
    if right.is_one() {
        return left;
    }
    if left.is_zero() || right.is_zero() {
        return Expr::literal(0);
    }
    match (left, right) {
        (
            Expr::FloorDiv { num: ln, den: ld },
            Expr::FloorDiv { num: rn, den: rd },
        ) => apply(
            &Expr::floor_div(Expr::product(*ln, *rn), Expr::product(*ld, *rd)),
            depth,
        ),
        (Expr::FloorDiv { num, den }, right) => {
            apply(&Expr::floor_div(Expr::product(*num, right), *den), depth)
        }
        (left, Expr::FloorDiv { num, den }) => {
            apply(&Expr::floor_div(Expr::product(left, *num), *den), depth)
        }
        (left, right) => Expr::product(left, right),
    }
}
