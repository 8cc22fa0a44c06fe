//! Construction of arbitrary-precision numeric primitives.

use rug::{ops::Pow, Assign, Float, Integer, Rational};

/// The number of bits of precision used for all floating-point operations.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Parses the given string of decimal digits into an [`Integer`].
///
/// The string must contain only ASCII digits; the tokenizer guarantees this for number lexemes.
pub fn int_from_str(s: &str) -> Integer {
    Integer::from(Integer::parse(s).unwrap())
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Parses a decimal literal, such as `3.14`, `7.`, or `.5`, into an exact [`Rational`].
///
/// Keeping decimal literals rational means symbolic manipulation is never contaminated by binary
/// floating-point rounding; values only become inexact at evaluation.
pub fn rational_from_str(s: &str) -> Rational {
    match s.split_once('.') {
        Some((int_part, frac_part)) => {
            let digits = format!("{int_part}{frac_part}");
            let numerator = if digits.is_empty() {
                int(0)
            } else {
                int_from_str(&digits)
            };
            let denominator = int(10).pow(frac_part.len() as u32);
            Rational::from((numerator, denominator))
        },
        None => Rational::from(int_from_str(s)),
    }
}

/// Creates a [`Float`] with the given value and [`PRECISION`].
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_decimals() {
        assert_eq!(rational_from_str("3.14"), rational((314, 100)));
        assert_eq!(rational_from_str("9.8"), rational((98, 10)));
        assert_eq!(rational_from_str(".5"), rational((1, 2)));
        assert_eq!(rational_from_str("7."), rational(7));
        assert_eq!(rational_from_str("42"), rational(42));
    }
}
