//! Trigonometric and hyperbolic functions. All angles are in radians.

use rug::Float;

macro_rules! forward {
    ($($(#[$attr:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            pub fn $name(n: Float) -> Float {
                n.$name()
            }
        )*
    };
}

forward!(
    /// Computes the sine of a radian angle.
    sin,
    /// Computes the cosine of a radian angle.
    cos,
    /// Computes the tangent of a radian angle.
    tan,
    /// Computes the arcsine, in radians.
    asin,
    /// Computes the arccosine, in radians.
    acos,
    /// Computes the arctangent, in radians.
    atan,
    /// Computes the hyperbolic sine.
    sinh,
    /// Computes the hyperbolic cosine.
    cosh,
    /// Computes the hyperbolic tangent.
    tanh,
);
