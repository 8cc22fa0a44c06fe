//! Symbolic partial differentiation.
//!
//! The rules here build their output with [`SumBuilder`] and [`MultBuilder`], which skip terms
//! that are trivially zero and factors that are trivially one. That keeps the derivatives free of
//! `0 * ...` and `1 * ...` noise without running a general simplifier over them, so the printed
//! partials keep the shape the differentiation rules produced.

mod function;

use crate::primitive::{float, int, rational};
use unc_error::Error;
use super::expr::{Primary, SymExpr};

/// Returns true if the expression is a literal zero.
fn is_trivially_zero(expr: &SymExpr) -> bool {
    match expr {
        SymExpr::Primary(Primary::Integer(n)) => n.is_zero(),
        SymExpr::Primary(Primary::Rational(n)) => n.is_zero(),
        SymExpr::Primary(Primary::Float(n)) => n.is_zero(),
        _ => false,
    }
}

/// Returns true if the expression is a literal one, or a power with a zero exponent.
fn is_trivially_unity(expr: &SymExpr) -> bool {
    match expr {
        SymExpr::Primary(Primary::Integer(n)) => *n == 1,
        SymExpr::Primary(Primary::Rational(n)) => *n == 1,
        SymExpr::Primary(Primary::Float(n)) => *n == 1,
        SymExpr::Exp(_, exponent) => is_trivially_zero(exponent),
        _ => false,
    }
}

/// Helps build the sum of multiple expressions, ignoring terms that are trivially zero.
#[derive(Default)]
struct SumBuilder {
    terms: Vec<SymExpr>,
}

impl SumBuilder {
    /// Adds a term to the sum.
    fn add(&mut self, expr: SymExpr) {
        if !is_trivially_zero(&expr) {
            self.terms.push(expr);
        }
    }
}

impl From<SumBuilder> for SymExpr {
    fn from(builder: SumBuilder) -> Self {
        SymExpr::Add(builder.terms).downgrade()
    }
}

/// Helps build the product of multiple expressions, ignoring factors that are trivially one. If
/// any factor is trivially zero, the product is zero.
#[derive(Default)]
struct MultBuilder {
    factors: Vec<SymExpr>,
    is_zero: bool,
}

impl MultBuilder {
    /// Adds a factor to the product.
    fn mult(&mut self, expr: SymExpr) {
        if self.is_zero {
            return;
        }

        if is_trivially_zero(&expr) {
            self.is_zero = true;
            self.factors.clear();
        } else if !is_trivially_unity(&expr) {
            self.factors.push(expr);
        }
    }
}

impl From<MultBuilder> for SymExpr {
    fn from(builder: MultBuilder) -> Self {
        if builder.is_zero {
            SymExpr::Primary(Primary::Integer(int(0)))
        } else {
            SymExpr::Mul(builder.factors).downgrade()
        }
    }
}

/// Subtracts one from a constant exponent, folding the subtraction when the exponent is numeric.
fn exponent_minus_one(exponent: &SymExpr) -> SymExpr {
    match exponent {
        SymExpr::Primary(Primary::Integer(n)) => SymExpr::Primary(Primary::Integer(n - int(1))),
        SymExpr::Primary(Primary::Rational(n)) => {
            SymExpr::Primary(Primary::Rational(n - rational(1)))
        },
        SymExpr::Primary(Primary::Float(n)) => SymExpr::Primary(Primary::Float(n - float(1))),
        other => SymExpr::Add(vec![other.clone(), SymExpr::Primary(Primary::Integer(int(-1)))]),
    }
}

/// The sum rule: the derivative of a sum is the sum of the derivatives of its terms.
fn sum_rule(terms: &[SymExpr], with: &str) -> Result<SymExpr, Error> {
    let mut sum = SumBuilder::default();
    for term in terms {
        sum.add(derivative(term, with)?);
    }
    Ok(sum.into())
}

/// The product rule, generalized to any number of factors: for each factor, differentiate it and
/// multiply by the remaining factors unchanged, then sum the results.
fn product_rule(factors: &[SymExpr], with: &str) -> Result<SymExpr, Error> {
    let mut sum = SumBuilder::default();
    for i in 0..factors.len() {
        let mut mult = MultBuilder::default();
        for (j, factor) in factors.iter().enumerate() {
            if i == j {
                mult.mult(derivative(factor, with)?);
            } else {
                mult.mult(factor.clone());
            }
        }
        sum.add(mult.into());
    }
    Ok(sum.into())
}

/// The power rule. When the exponent is constant, `d/dx f^c = c * f^(c - 1) * f'`; otherwise the
/// general form `d/dx f^g = f^g * (g' * ln(f) + g * f' / f)` applies, which also covers `c^x`
/// and `x^x`.
fn power_rule(base: &SymExpr, exponent: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    if exponent.contains_symbol(with) {
        let mut first = MultBuilder::default();
        first.mult(derivative(exponent, with)?);
        first.mult(SymExpr::Primary(Primary::Call("ln".to_string(), vec![base.clone()])));

        let mut second = MultBuilder::default();
        second.mult(exponent.clone());
        second.mult(derivative(base, with)?);
        second.mult(SymExpr::Exp(
            Box::new(base.clone()),
            Box::new(SymExpr::Primary(Primary::Integer(int(-1)))),
        ));

        let mut inner = SumBuilder::default();
        inner.add(first.into());
        inner.add(second.into());

        let mut mult = MultBuilder::default();
        mult.mult(SymExpr::Exp(Box::new(base.clone()), Box::new(exponent.clone())));
        mult.mult(inner.into());
        Ok(mult.into())
    } else {
        let mut mult = MultBuilder::default();
        mult.mult(derivative(base, with)?);
        mult.mult(exponent.clone());
        let new_exponent = exponent_minus_one(exponent);
        mult.mult(if is_trivially_unity(&new_exponent) {
            base.clone()
        } else {
            SymExpr::Exp(Box::new(base.clone()), Box::new(new_exponent))
        });
        Ok(mult.into())
    }
}

/// Computes the symbolic partial derivative of the given expression with respect to the symbol
/// `with`. All other symbols are treated as constants.
pub fn derivative(expr: &SymExpr, with: &str) -> Result<SymExpr, Error> {
    let result = match expr {
        SymExpr::Primary(Primary::Integer(_))
        | SymExpr::Primary(Primary::Rational(_))
        | SymExpr::Primary(Primary::Float(_)) => SymExpr::Primary(Primary::Integer(int(0))),
        SymExpr::Primary(Primary::Symbol(sym)) => {
            if sym == with {
                SymExpr::Primary(Primary::Integer(int(1)))
            } else {
                SymExpr::Primary(Primary::Integer(int(0)))
            }
        },
        SymExpr::Primary(Primary::Call(func, args)) => {
            function::function_derivative(func, args, with)?
        },
        SymExpr::Add(terms) => sum_rule(terms, with)?,
        SymExpr::Mul(factors) => product_rule(factors, with)?,
        SymExpr::Exp(base, exponent) => power_rule(base, exponent, with)?,
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use unc_parser::parser::{expr::Expr as AstExpr, Parser};
    use crate::symbolic::evaluate;
    use super::*;

    fn convert(source: &str) -> SymExpr {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        SymExpr::from(ast)
    }

    /// Checks the symbolic derivative of `source` with respect to `x` against a centered finite
    /// difference at several points.
    fn check_against_finite_difference(source: &str, points: &[f64]) {
        let expr = convert(source);
        let result = derivative(&expr, "x").unwrap();

        const H: f64 = 1e-6;
        for &point in points {
            let at = |expr: &SymExpr, x: f64| {
                let value = SymExpr::Primary(Primary::Float(float(x)));
                evaluate(&expr.substitute("x", &value)).unwrap().to_f64()
            };
            let expected = (at(&expr, point + H) - at(&expr, point - H)) / (2.0 * H);
            let actual = at(&result, point);
            assert_float_absolute_eq!(actual, expected, 1e-4);
        }
    }

    #[test]
    fn polynomial() {
        let result = derivative(&convert("x^2 + x + 1"), "x").unwrap();
        assert_eq!(result, convert("2 * x + 1"));
    }

    #[test]
    fn other_symbols_are_constant() {
        let result = derivative(&convert("a * x + b"), "x").unwrap();
        assert_eq!(result, convert("a"));
    }

    #[test]
    fn reciprocal() {
        // d/dx x^-1 = -1 * x^-2
        check_against_finite_difference("1 / x", &[0.5, 1.0, 3.0, -2.0]);
    }

    #[test]
    fn square_root() {
        check_against_finite_difference("sqrt(x)", &[0.25, 1.0, 9.0]);
    }

    #[test]
    fn trigonometric() {
        let result = derivative(&convert("sin(x)"), "x").unwrap();
        assert_eq!(result, convert("cos(x)"));

        check_against_finite_difference("cos(x)", &[0.0, 1.0, 2.5]);
        check_against_finite_difference("tan(x)", &[0.0, 0.7, -0.7]);
    }

    #[test]
    fn inverse_trigonometric() {
        check_against_finite_difference("asin(x)", &[-0.5, 0.0, 0.5]);
        check_against_finite_difference("acos(x)", &[-0.5, 0.0, 0.5]);
        check_against_finite_difference("atan(x)", &[-2.0, 0.0, 2.0]);
    }

    #[test]
    fn hyperbolic() {
        check_against_finite_difference("sinh(x)", &[-1.0, 0.0, 1.0]);
        check_against_finite_difference("cosh(x)", &[-1.0, 0.0, 1.0]);
        check_against_finite_difference("tanh(x)", &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn exponential_and_logarithm() {
        check_against_finite_difference("exp(2 * x)", &[-1.0, 0.0, 1.0]);
        check_against_finite_difference("ln(x)", &[0.5, 1.0, 4.0]);
        check_against_finite_difference("log(x^2)", &[0.5, 1.0, 4.0]);
    }

    #[test]
    fn chain_rule() {
        check_against_finite_difference("sin(x^2 + 1)", &[-1.0, 0.0, 0.5, 2.0]);
        check_against_finite_difference("sqrt(9.8 * x * tan(0.4))", &[1.0, 4.0]);
    }

    #[test]
    fn general_power_rule() {
        // constant base
        check_against_finite_difference("2^x", &[0.0, 1.0, 3.0]);
        // both base and exponent vary
        check_against_finite_difference("x^x", &[0.5, 1.0, 2.0]);
    }

    #[test]
    fn constant_derivative_is_zero() {
        let zero = SymExpr::Primary(Primary::Integer(int(0)));
        assert_eq!(derivative(&convert("pi * 4 + 2.5"), "x").unwrap(), zero);
        assert_eq!(derivative(&convert("y^2"), "x").unwrap(), zero);
    }

    #[test]
    fn rejects_unknown_function() {
        use crate::error::kind;
        let err = derivative(&convert("sine(x)"), "x").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<kind::UndefinedFunction>().unwrap();
        assert!(kind.suggestions.contains(&"sin".to_string()));
    }
}
