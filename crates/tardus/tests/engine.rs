//! End-to-end tests spanning construction, evaluation, modular
//! reduction, and simplification.

use tardus::prelude::*;

#[test]
fn test_simplification_can_remove_an_evaluation_error() {
    // |(-2/-3)| / (2/3): both divisions floor to 0, so direct
    // evaluation divides by zero. The rewrite rules cancel the
    // tree down to 1 before any division happens.
    let e = Expr::floor_div(
        Expr::floor_div(-2, -3).abs(),
        Expr::floor_div(2, 3),
    );
    assert_eq!(e.eval(), Err(EvalError::DivisionByZero));

    let s = simplify(&e);
    assert_eq!(s, Expr::literal(1));
    assert_eq!(s.eval().unwrap(), Integer::new(1));
}

#[test]
fn test_identity_laws() {
    let x = Expr::floor_div(5, 3);
    assert_eq!(simplify(&(x.clone() + 0)), simplify(&x));
    assert_eq!(simplify(&(x.clone() * 1)), simplify(&x));
    assert_eq!(simplify(&x.clone().pow(1)), simplify(&x));
    assert_eq!(simplify(&(Expr::literal(0) * x)), Expr::literal(0));
}

#[test]
fn test_partial_cancellation_keeps_symbolic_factors() {
    // (6*x)/4 -> (3*x)/2 with x untouched
    let x = Expr::literal(2).pow(10);
    let e = Expr::floor_div(Expr::product(6, x.clone()), 4);
    assert_eq!(simplify(&e), Expr::floor_div(Expr::product(3, x), 2));
}

#[test]
fn test_evaluation_uses_floor_semantics() {
    assert_eq!(Expr::floor_div(7, 2).eval().unwrap(), Integer::new(3));
    assert_eq!(Expr::floor_div(-7, 2).eval().unwrap(), Integer::new(-4));
    assert_eq!(Expr::floor_div(7, -2).eval().unwrap(), Integer::new(-4));
}

#[test]
fn test_modular_reduction_handles_towers_evaluation_cannot() {
    // 2^(2^70) is far too large to materialize, but its residue
    // modulo 3 only needs the exponent's value
    let e = Expr::literal(2).pow(Expr::literal(2).pow(70));
    assert_eq!(e.eval(), Err(EvalError::ExponentTooLarge));
    assert_eq!(e.mod_reduce(&Integer::new(3)).unwrap(), Integer::new(1));
}

#[test]
fn test_display_flattens_associative_chains() {
    let e = Expr::sum(Expr::sum(1, 2), 3);
    assert_eq!(e.to_string(), "(1 + 2 + 3)");
    let e = Expr::product(Expr::product(2, 3), 4);
    assert_eq!(e.to_string(), "(2*3*4)");
}

#[test]
fn test_operators_build_the_same_trees_as_constructors() {
    let a = Expr::literal(2) + 3;
    assert_eq!(a, Expr::sum(2, 3));
    let b = Expr::literal(10) / 4;
    assert_eq!(b, Expr::floor_div(10, 4));
    let c = Expr::literal(5) - 2;
    assert_eq!(c.eval().unwrap(), Integer::new(3));
}

mod modular_consistency {
    use proptest::prelude::*;

    use tardus::prelude::*;

    /// Trees built from literals, sums, products, negations, and small
    /// literal powers. Everything here evaluates exactly, so reduction
    /// can be checked against the evaluated residue.
    fn evaluable_expr() -> impl Strategy<Value = Expr> {
        let leaf = (-50i64..50).prop_map(Expr::from);
        leaf.prop_recursive(4, 24, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::sum(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::product(a, b)),
                inner.clone().prop_map(|a| -a),
                (inner, 0i64..5).prop_map(|(a, e)| a.pow(e)),
            ]
        })
    }

    proptest! {
        #[test]
        fn reduction_is_congruent_to_evaluation(
            e in evaluable_expr(),
            m in 1i64..100,
        ) {
            let m = Integer::new(m);
            // a negation at the root may report a residue outside
            // [0, m); compare canonically
            let reduced = e.mod_reduce(&m).unwrap().rem_euclid(&m);
            let evaluated = e.eval().unwrap().rem_euclid(&m);
            prop_assert_eq!(reduced, evaluated);
        }

        #[test]
        fn simplification_preserves_residues(
            e in evaluable_expr(),
            m in 1i64..100,
        ) {
            let m = Integer::new(m);
            let s = simplify(&e);
            prop_assert_eq!(
                s.mod_reduce(&m).unwrap().rem_euclid(&m),
                e.mod_reduce(&m).unwrap().rem_euclid(&m)
            );
        }
    }
}
