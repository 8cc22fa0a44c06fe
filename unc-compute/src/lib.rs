//! Symbolic computation for uncertainty propagation.
//!
//! This crate converts parsed equations into a flattened symbolic form
//! ([`symbolic::SymExpr`]) that supports the three operations propagation
//! needs: exact partial differentiation, structural substitution of
//! measurement values, and numeric evaluation to an arbitrary-precision
//! [`rug::Float`].

pub mod consts;
pub mod error;
pub mod funcs;
pub mod primitive;
pub mod symbolic;
