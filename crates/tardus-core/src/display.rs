//! Canonical parenthesized text form.
//!
//! Sums and products print as one flattened group after associativity
//! unwrapping, so `Sum(Sum(1, 2), 3)` renders as `(1 + 2 + 3)` and
//! never `((1 + 2) + 3)`. The output is for diagnostics and structural
//! comparison in tests; it is not meant to be re-parseable.

use std::fmt;

use crate::Expr;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Neg(value) => write!(f, "-{value}"),
            Expr::Abs(value) => write!(f, "|{value}|"),
            Expr::Sum(_, _) => {
                write!(f, "(")?;
                for (i, term) in self.summands().iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{term}")?;
                }
                write!(f, ")")
            }
            Expr::Product(_, _) => {
                write!(f, "(")?;
                for (i, factor) in self.factors().iter().enumerate() {
                    if i > 0 {
                        write!(f, "*")?;
                    }
                    write!(f, "{factor}")?;
                }
                write!(f, ")")
            }
            Expr::Pow { base, exp } => write!(f, "{base}^{exp}"),
            Expr::FloorDiv { num, den } => write!(f, "({num}/{den})"),
        }
    }
}
