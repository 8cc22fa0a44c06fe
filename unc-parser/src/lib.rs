//! Tokenizer and parser for the equation language understood by the
//! uncertainty propagator.
//!
//! Equations are infix expressions over integer and decimal literals, named
//! variables, the operators `+`, `-`, `*`, `/` and `^` (exponentiation, also
//! spelled `**`), unary negation, parentheses, and single-argument function
//! calls such as `sqrt(x)` or `sin(theta)`. The parser produces an abstract
//! syntax tree where every node remembers the region of the source it was
//! parsed from, so errors anywhere downstream can point back into the
//! original equation.

pub mod parser;
pub mod tokenizer;
