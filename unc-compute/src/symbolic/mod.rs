//! Symbolic manipulation of expressions.
//!
//! The [`SymExpr`] type flattens the parser's binary tree into n-ary sums and products, which
//! makes the differentiation rules in [`derivative`] straightforward to state. Expressions are
//! deliberately never simplified beyond folding away factors that are trivially zero or one, so
//! the derivation output shows the same structure the rules produced.

pub mod derivative;
pub mod eval;
pub mod expr;
pub mod fmt;

pub use derivative::derivative;
pub use eval::evaluate;
pub use expr::{Primary, SymExpr};
