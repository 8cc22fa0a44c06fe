//! Roots, exponentials, and logarithms.

use rug::Float;

/// Computes the square root of the given value.
pub fn sqrt(n: Float) -> Float {
    n.sqrt()
}

/// Computes e raised to the given power.
pub fn exp(n: Float) -> Float {
    n.exp()
}

/// Computes the natural logarithm of the given value.
pub fn ln(n: Float) -> Float {
    n.ln()
}
