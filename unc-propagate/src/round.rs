//! Rounding of a value and its uncertainty for presentation.

use crate::error::kind;
use unc_error::Error;

/// A value and uncertainty rounded for presentation, as produced by [`round_uncertainty`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rounded {
    /// The rounded central value.
    pub value: f64,

    /// The uncertainty, rounded to one significant digit.
    pub uncertainty: f64,

    /// The decimal place both numbers are rounded to. Positive places count digits after the
    /// decimal point, so `0.05` has place 2, while `10` has place -1.
    pub place: i32,
}

impl Rounded {
    /// The number of digits to print after the decimal point: the rounding place, clamped so
    /// places left of the decimal point print no fractional digits.
    pub fn decimals(&self) -> usize {
        self.place.max(0) as usize
    }
}

/// Returns the decimal place of the leading significant digit of `x`, which must be positive.
fn leading_digit_place(x: f64) -> i32 {
    (-x.log10()).ceil() as i32
}

/// Rounds `x` to the given decimal place, half away from zero.
///
/// Negative places scale down rather than up, so rounding `254` to place -2 is computed as
/// `round(2.54) * 100`, which is exactly 300 in binary floating point.
fn round_to_place(x: f64, place: i32) -> f64 {
    if place >= 0 {
        let scale = 10f64.powi(place);
        (x * scale).round() / scale
    } else {
        let scale = 10f64.powi(-place);
        (x / scale).round() * scale
    }
}

/// Rounds the uncertainty to one significant digit and the value to the same decimal place.
///
/// Rounding happens in two passes because rounding can promote the uncertainty's leading digit
/// to a higher place: `0.099` first rounds to `0.1` at place 2, whose leading digit sits at
/// place 1, so both numbers are rounded again at the smaller of the two places.
pub fn round_uncertainty(value: f64, uncertainty: f64) -> Result<Rounded, Error> {
    // `!(x > 0)` also catches NaN
    if !(uncertainty > 0.0) || !uncertainty.is_finite() {
        return Err(Error::new(vec![], kind::InvalidUncertainty { uncertainty }));
    }

    let first = leading_digit_place(uncertainty);
    let place = first.min(leading_digit_place(round_to_place(uncertainty, first)));
    Ok(Rounded {
        value: round_to_place(value, place),
        uncertainty: round_to_place(uncertainty, place),
        place,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn round(value: f64, uncertainty: f64) -> (f64, f64, i32) {
        let rounded = round_uncertainty(value, uncertainty).unwrap();
        (rounded.value, rounded.uncertainty, rounded.place)
    }

    #[test]
    fn fractional() {
        assert_eq!(round(0.123, 0.02), (0.12, 0.02, 2));
    }

    #[test]
    fn larger_than_one() {
        assert_eq!(round(123.0, 10.0), (120.0, 10.0, -1));
    }

    #[test]
    fn uncertainty_rounds_down_to_ten() {
        assert_eq!(round(200.0, 12.0), (200.0, 10.0, -1));
    }

    #[test]
    fn value_rounds_to_zero() {
        assert_eq!(round(10.0, 254.0), (0.0, 300.0, -2));
    }

    #[test]
    fn rounding_promotes_the_leading_digit() {
        // 0.099 rounds to 0.1, which moves the leading digit up a place
        assert_eq!(round(0.098, 0.099), (0.1, 0.1, 1));
    }

    #[test]
    fn idempotent() {
        let rounded = round_uncertainty(0.123, 0.02).unwrap();
        let again = round_uncertainty(rounded.value, rounded.uncertainty).unwrap();
        assert_eq!(rounded, again);
    }

    #[test]
    fn negative_values_round_away_from_zero() {
        assert_eq!(round(-0.123, 0.02), (-0.12, 0.02, 2));
        assert_eq!(round(-125.0, 10.0), (-130.0, 10.0, -1));
    }

    #[test]
    fn decimals_clamp_at_zero() {
        assert_eq!(round_uncertainty(123.0, 10.0).unwrap().decimals(), 0);
        assert_eq!(round_uncertainty(0.123, 0.02).unwrap().decimals(), 2);
    }

    #[test]
    fn rejects_invalid_uncertainties() {
        for uncertainty in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = round_uncertainty(1.0, uncertainty).unwrap_err();
            assert!(
                err.kind.as_any().downcast_ref::<kind::InvalidUncertainty>().is_some(),
                "{uncertainty} was not rejected",
            );
        }
    }
}
