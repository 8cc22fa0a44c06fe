//! Propagation of measurement uncertainties by the method of quadrature.
//!
//! Given an equation, the variables appearing in it, and a measured value with an absolute
//! uncertainty for each variable, [`propagate`] computes the central value of the equation and
//! the propagated uncertainty:
//!
//! ```text
//! delta_f = sqrt((df/dx * delta_x)^2 + (df/dy * delta_y)^2 + ...)
//! ```
//!
//! The partial derivatives are computed symbolically, so the result carries no finite-difference
//! error, and [`latex::Derivation`] can show every intermediate step of the calculation as a
//! LaTeX document. [`round::round_uncertainty`] rounds the pair for presentation, with the
//! uncertainty rounded to one significant digit and the value rounded to match.

pub mod error;
pub mod latex;
pub mod propagate;
pub mod round;

pub use latex::Derivation;
pub use propagate::{propagate, Measurement, Propagation};
pub use round::{round_uncertainty, Rounded};
