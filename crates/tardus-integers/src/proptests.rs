//! Property-based tests for exact and modular arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, ModInt};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for generating moduli
    fn modulus() -> impl Strategy<Value = i64> {
        1i64..1000i64
    }

    proptest! {
        // Floor division: a == b * (a // b) + r with 0 <= r < |b| when b > 0,
        // matching Python's divmod convention.

        #[test]
        fn div_floor_euclid_identity(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.div_floor(&b);
            let r = &a - &(&b * &q);
            // remainder has the sign of the divisor (or is zero)
            prop_assert!(r.is_zero() || r.is_negative() == b.is_negative());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn div_floor_agrees_with_primitive(a in small_int(), b in non_zero_int()) {
            // i64 has no floor division; derive it from truncating division
            let t = a / b;
            let expected = if a % b != 0 && ((a < 0) != (b < 0)) { t - 1 } else { t };
            let q = Integer::new(a).div_floor(&Integer::new(b));
            prop_assert_eq!(q.to_i64(), Some(expected));
        }

        #[test]
        fn rem_euclid_in_range(a in small_int(), m in modulus()) {
            let r = Integer::new(a).rem_euclid(&Integer::new(m));
            prop_assert!(!r.is_negative());
            prop_assert!(r < Integer::new(m));
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            let rem_a = a.clone() % g.clone();
            let rem_b = b.clone() % g.clone();
            prop_assert!(rem_a.is_zero());
            prop_assert!(rem_b.is_zero());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // ModInt properties

        #[test]
        fn modint_residue_canonical(a in small_int(), m in modulus()) {
            let x = ModInt::new(Integer::new(a), Integer::new(m));
            prop_assert!(!x.residue().is_negative());
            prop_assert!(*x.residue() < Integer::new(m));
        }

        #[test]
        fn modint_add_commutative(a in small_int(), b in small_int(), m in modulus()) {
            let a = ModInt::new(Integer::new(a), Integer::new(m));
            let b = ModInt::new(Integer::new(b), Integer::new(m));
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn modint_mul_commutative(a in small_int(), b in small_int(), m in modulus()) {
            let a = ModInt::new(Integer::new(a), Integer::new(m));
            let b = ModInt::new(Integer::new(b), Integer::new(m));
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn modint_additive_inverse(a in small_int(), m in modulus()) {
            let a = ModInt::new(Integer::new(a), Integer::new(m));
            let sum = &a + &(-&a);
            prop_assert!(sum.residue().is_zero());
        }

        #[test]
        fn modint_pow_matches_repeated_mul(a in small_int(), e in 0u32..12, m in modulus()) {
            let a = ModInt::new(Integer::new(a), Integer::new(m));
            let mut expected = ModInt::new(Integer::new(1), Integer::new(m));
            for _ in 0..e {
                expected = &expected * &a;
            }
            prop_assert_eq!(a.pow(&Integer::new(i64::from(e))), expected);
        }

        #[test]
        fn modint_inv_is_inverse(a in non_zero_int(), m in 2i64..1000) {
            let a = ModInt::new(Integer::new(a), Integer::new(m));
            if let Some(inv) = a.inv() {
                prop_assert!((&a * &inv).residue().is_one());
            }
        }
    }
}
