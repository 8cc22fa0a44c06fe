//! Errors raised while propagating uncertainties.

pub mod kind;

pub use unc_error::Error;
