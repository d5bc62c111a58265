//! # Tardus
//!
//! A symbolic engine for exact integer expression trees.
//!
//! Tardus builds expressions over arbitrary-precision integers and
//! provides exact evaluation, modular reduction, and rule-based
//! simplification.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: every literal is a big integer
//! - **Exact Evaluation**: floor semantics for division, explicit
//!   errors for division by zero and negative exponents
//! - **Modular Reduction**: residues computed without materializing
//!   huge intermediates where the tree's shape allows it
//! - **Simplification**: deterministic bottom-up rewriting
//!
//! ## Quick Start
//!
//! ```rust
//! use tardus::prelude::*;
//!
//! let e = Expr::floor_div(Expr::product(6, 7), 4);
//! assert_eq!(e.eval().unwrap(), Integer::new(10));
//! assert_eq!(simplify(&e).to_string(), "((3*7)/2)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tardus_core as core;
pub use tardus_integers as integers;
pub use tardus_simplify as simplify;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tardus_core::{EvalError, Expr};
    pub use tardus_integers::{Integer, ModInt};
    pub use tardus_simplify::simplify;
}
