//! Modular arithmetic.
//!
//! This module provides integers modulo a runtime-determined modulus,
//! used by callers that evaluate expressions under a modulus.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::Integer;

/// A modular integer with a runtime-determined modulus.
///
/// The stored value is always the canonical non-negative residue in
/// `[0, modulus)`. Arithmetic between two `ModInt`s requires equal
/// moduli.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ModInt {
    value: Integer,
    modulus: Integer,
}

impl ModInt {
    /// Creates a new modular integer, reducing `value` to its canonical
    /// residue.
    ///
    /// # Panics
    ///
    /// Panics if the modulus is not positive.
    #[must_use]
    pub fn new(value: Integer, modulus: Integer) -> Self {
        assert!(
            modulus > Integer::zero(),
            "modulus must be a positive integer"
        );
        let value = value.rem_euclid(&modulus);
        Self { value, modulus }
    }

    /// Returns the canonical residue in `[0, modulus)`.
    #[must_use]
    pub fn residue(&self) -> &Integer {
        &self.value
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// The representative of this residue class with the least absolute
    /// value, in `(-modulus/2, modulus/2]`.
    #[must_use]
    pub fn least_magnitude(&self) -> Integer {
        let half = self.modulus.div_floor(&Integer::new(2));
        if self.value > half {
            &self.value - &self.modulus
        } else {
            self.value.clone()
        }
    }

    /// Computes the modular inverse using the extended Euclidean algorithm.
    ///
    /// Returns `None` if the inverse doesn't exist (when
    /// gcd(value, modulus) != 1).
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        if self.value.is_zero() {
            return None;
        }

        // Extended Euclidean algorithm
        let mut t = Integer::zero();
        let mut new_t = Integer::one();
        let mut r = self.modulus.clone();
        let mut new_r = self.value.clone();

        while !new_r.is_zero() {
            let quotient = r.div_floor(&new_r);
            (t, new_t) = (new_t.clone(), t - &quotient * &new_t);
            (r, new_r) = (new_r.clone(), r - &quotient * &new_r);
        }

        if !r.is_one() {
            return None; // Not coprime
        }

        Some(Self::new(t, self.modulus.clone()))
    }

    /// Computes self^exp using binary exponentiation.
    ///
    /// # Panics
    ///
    /// Panics if the exponent is negative; use [`ModInt::inv`] first to
    /// raise to a negative power.
    #[must_use]
    pub fn pow(&self, exp: &Integer) -> Self {
        assert!(!exp.is_negative(), "exponent must be non-negative");
        let mut base = self.clone();
        let mut result = Self::new(Integer::one(), self.modulus.clone());
        let mut exp = exp.clone();
        let two = Integer::new(2);

        while !exp.is_zero() {
            if exp.is_odd() {
                result = &result * &base;
            }
            base = &base * &base;
            exp = exp.div_floor(&two);
        }

        result
    }
}

impl fmt::Debug for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

fn check_moduli(lhs: &ModInt, rhs: &ModInt) {
    assert!(
        lhs.modulus == rhs.modulus,
        "mixed moduli: {} and {}",
        lhs.modulus,
        rhs.modulus
    );
}

impl Add for &ModInt {
    type Output = ModInt;

    fn add(self, rhs: Self) -> Self::Output {
        check_moduli(self, rhs);
        ModInt::new(&self.value + &rhs.value, self.modulus.clone())
    }
}

impl Add for ModInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &ModInt {
    type Output = ModInt;

    fn sub(self, rhs: Self) -> Self::Output {
        check_moduli(self, rhs);
        ModInt::new(&self.value - &rhs.value, self.modulus.clone())
    }
}

impl Sub for ModInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &ModInt {
    type Output = ModInt;

    fn mul(self, rhs: Self) -> Self::Output {
        check_moduli(self, rhs);
        ModInt::new(&self.value * &rhs.value, self.modulus.clone())
    }
}

impl Mul for ModInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for &ModInt {
    type Output = ModInt;

    fn neg(self) -> Self::Output {
        ModInt::new(-&self.value, self.modulus.clone())
    }
}

impl Neg for ModInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}
