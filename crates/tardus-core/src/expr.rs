//! Expression node types.
//!
//! This module defines the expression tree and its construction API.
//! Trees are immutable once built: every rewrite produces new nodes.

use num_traits::{One, Zero};
use smallvec::SmallVec;
use std::ops::{Add, Div, Mul, Neg, Sub};

use tardus_integers::Integer;

/// An integer-valued algebraic expression.
///
/// This enum represents all possible node types. Every child is
/// exclusively owned; there is no sharing between trees and no interior
/// mutability, so finished trees may be inspected from several threads
/// at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// An integer literal. Terminal; equality is by value.
    Literal(Integer),

    /// Negation: -expr.
    Neg(Box<Expr>),

    /// Absolute value: |expr|.
    Abs(Box<Expr>),

    /// Sum of two expressions: left + right.
    Sum(Box<Expr>, Box<Expr>),

    /// Product of two expressions: left * right.
    Product(Box<Expr>, Box<Expr>),

    /// Power expression: base^exp.
    Pow {
        /// The base of the power.
        base: Box<Expr>,
        /// The exponent.
        exp: Box<Expr>,
    },

    /// Floor division: numerator / denominator, rounded toward negative
    /// infinity.
    FloorDiv {
        /// The numerator.
        num: Box<Expr>,
        /// The denominator.
        den: Box<Expr>,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub fn literal(value: impl Into<Integer>) -> Self {
        Expr::Literal(value.into())
    }

    /// Creates a sum node. Plain integers are wrapped into literals.
    #[must_use]
    pub fn sum(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Sum(Box::new(left.into()), Box::new(right.into()))
    }

    /// Creates a product node. Plain integers are wrapped into literals.
    #[must_use]
    pub fn product(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Product(Box::new(left.into()), Box::new(right.into()))
    }

    /// Creates a power node. Plain integers are wrapped into literals.
    #[must_use]
    pub fn pow(self, exp: impl Into<Expr>) -> Self {
        Expr::Pow {
            base: Box::new(self),
            exp: Box::new(exp.into()),
        }
    }

    /// Creates a floor-division node. Plain integers are wrapped into
    /// literals.
    #[must_use]
    pub fn floor_div(num: impl Into<Expr>, den: impl Into<Expr>) -> Self {
        Expr::FloorDiv {
            num: Box::new(num.into()),
            den: Box::new(den.into()),
        }
    }

    /// Wraps this expression in an absolute-value node.
    #[must_use]
    pub fn abs(self) -> Self {
        Expr::Abs(Box::new(self))
    }

    /// Returns true if this node is a literal.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }

    /// Returns the literal value if this node is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Integer> {
        match self {
            Expr::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if this is the literal zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Literal(value) if value.is_zero())
    }

    /// Returns true if this is the literal one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Literal(value) if value.is_one())
    }

    /// The flat ordered sequence of transitively nested `Sum` children.
    ///
    /// `Sum(Sum(a, b), c)` flattens to `[a, b, c]`. Flattening never
    /// crosses a different variant; on a non-`Sum` node this returns the
    /// node itself.
    #[must_use]
    pub fn summands(&self) -> SmallVec<[&Expr; 4]> {
        match self {
            Expr::Sum(left, right) => {
                let mut terms = left.summands();
                terms.extend(right.summands());
                terms
            }
            other => smallvec::smallvec![other],
        }
    }

    /// The flat ordered sequence of transitively nested `Product`
    /// children, analogous to [`Expr::summands`].
    #[must_use]
    pub fn factors(&self) -> SmallVec<[&Expr; 4]> {
        match self {
            Expr::Product(left, right) => {
                let mut terms = left.factors();
                terms.extend(right.factors());
                terms
            }
            other => smallvec::smallvec![other],
        }
    }
}

impl From<Integer> for Expr {
    fn from(value: Integer) -> Self {
        Expr::Literal(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Literal(Integer::new(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Literal(Integer::from(value))
    }
}

// Operator-overload construction. These build nodes; nothing is
// evaluated. Any `Into<Expr>` operand (plain integers included) is
// normalized into a `Literal`, so trees never contain raw integers.

impl<T: Into<Expr>> Add<T> for Expr {
    type Output = Expr;

    fn add(self, rhs: T) -> Expr {
        Expr::sum(self, rhs)
    }
}

impl Add<Expr> for i64 {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::sum(self, rhs)
    }
}

impl<T: Into<Expr>> Sub<T> for Expr {
    type Output = Expr;

    fn sub(self, rhs: T) -> Expr {
        Expr::sum(self, -rhs.into())
    }
}

impl Sub<Expr> for i64 {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::sum(self, -rhs)
    }
}

impl<T: Into<Expr>> Mul<T> for Expr {
    type Output = Expr;

    fn mul(self, rhs: T) -> Expr {
        Expr::product(self, rhs)
    }
}

impl Mul<Expr> for i64 {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::product(self, rhs)
    }
}

impl<T: Into<Expr>> Div<T> for Expr {
    type Output = Expr;

    /// Builds a [`Expr::FloorDiv`] node; the quotient rounds toward
    /// negative infinity when evaluated.
    fn div(self, rhs: T) -> Expr {
        Expr::floor_div(self, rhs)
    }
}

impl Div<Expr> for i64 {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::floor_div(self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}
