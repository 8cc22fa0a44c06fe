//! Conversions between angle units.

use crate::consts::PI;
use rug::Float;

/// Converts an angle in degrees to radians.
pub fn dtr(n: Float) -> Float {
    n * &*PI / 180
}

/// Converts an angle in radians to degrees.
pub fn rtd(n: Float) -> Float {
    n * 180 / &*PI
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::primitive::float;
    use super::*;

    #[test]
    fn round_trips() {
        assert_float_absolute_eq!(dtr(float(180)).to_f64(), std::f64::consts::PI);
        assert_float_absolute_eq!(rtd(dtr(float(24.73))).to_f64(), 24.73);
    }
}
