//! Numeric evaluation of symbolic expressions.

use crate::consts;
use crate::error::kind;
use crate::funcs;
use crate::primitive::float;
use rug::{ops::Pow, Float};
use unc_error::Error;
use super::expr::{Primary, SymExpr};

/// Evaluates the given expression to a [`Float`].
///
/// The expression must contain no free symbols other than the built-in constants; substitute
/// measurement values first. A NaN or infinite result is reported as an error rather than
/// returned.
pub fn evaluate(expr: &SymExpr) -> Result<Float, Error> {
    let value = eval(expr)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::new(vec![], kind::NotFinite))
    }
}

fn eval(expr: &SymExpr) -> Result<Float, Error> {
    match expr {
        SymExpr::Primary(Primary::Integer(n)) => Ok(float(n)),
        SymExpr::Primary(Primary::Rational(n)) => Ok(float(n)),
        SymExpr::Primary(Primary::Float(n)) => Ok(n.clone()),
        SymExpr::Primary(Primary::Symbol(sym)) => consts::resolve(sym).ok_or_else(|| {
            Error::new(vec![], kind::UndefinedVariable {
                name: sym.clone(),
                suggestions: Vec::new(),
            })
        }),
        SymExpr::Primary(Primary::Call(func, args)) => {
            let builtin = funcs::lookup(func).ok_or_else(|| {
                Error::new(vec![], kind::UndefinedFunction {
                    name: func.clone(),
                    suggestions: funcs::similar_names(func),
                })
            })?;
            if args.len() != 1 {
                return Err(Error::new(vec![], kind::InvalidArgumentCount {
                    name: func.clone(),
                    given: args.len(),
                }));
            }
            Ok(builtin(eval(&args[0])?))
        },
        SymExpr::Add(terms) => {
            let mut sum = float(0);
            for term in terms {
                sum += eval(term)?;
            }
            Ok(sum)
        },
        SymExpr::Mul(factors) => {
            let mut product = float(1);
            for factor in factors {
                product *= eval(factor)?;
            }
            Ok(product)
        },
        SymExpr::Exp(base, exponent) => {
            let base = eval(base)?;
            let exponent = eval(exponent)?;

            // division is desugared to a negative power, so a zero base here is a zero
            // denominator in the source expression
            if base.is_zero() && exponent.is_sign_negative() && !exponent.is_zero() {
                return Err(Error::new(vec![], kind::DivisionByZero));
            }
            Ok(base.pow(exponent))
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use unc_parser::parser::{expr::Expr as AstExpr, Parser};
    use super::*;

    fn eval_str(source: &str) -> Result<Float, Error> {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        evaluate(&SymExpr::from(ast))
    }

    #[test]
    fn arithmetic() {
        assert_float_absolute_eq!(eval_str("1 + 2 * 3").unwrap().to_f64(), 7.0);
        assert_float_absolute_eq!(eval_str("2 ^ -2").unwrap().to_f64(), 0.25);
        assert_float_absolute_eq!(eval_str("2 ** 3 ** 2").unwrap().to_f64(), 512.0);
        assert_float_absolute_eq!(eval_str("(1 + 2) / 4").unwrap().to_f64(), 0.75);
    }

    #[test]
    fn constants() {
        assert_float_absolute_eq!(eval_str("cos(pi)").unwrap().to_f64(), -1.0);
        assert_float_absolute_eq!(eval_str("ln(e)").unwrap().to_f64(), 1.0);
        assert_float_absolute_eq!(eval_str("tau / pi").unwrap().to_f64(), 2.0);
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(eval_str("sqrt(16)").unwrap().to_f64(), 4.0);
        assert_float_absolute_eq!(eval_str("atan(tan(0.5))").unwrap().to_f64(), 0.5);
        assert_float_absolute_eq!(
            eval_str("cosh(1)^2 - sinh(1)^2").unwrap().to_f64(),
            1.0,
        );
    }

    #[test]
    fn division_by_zero() {
        let err = eval_str("1 / 0").unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::DivisionByZero>().is_some());

        let err = eval_str("1 / (2 - 2)").unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::DivisionByZero>().is_some());
    }

    #[test]
    fn not_finite() {
        let err = eval_str("sqrt(-1)").unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::NotFinite>().is_some());

        let err = eval_str("ln(0)").unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::NotFinite>().is_some());
    }

    #[test]
    fn free_symbol() {
        let err = eval_str("x + 1").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<kind::UndefinedVariable>().unwrap();
        assert_eq!(kind.name, "x");
    }

    #[test]
    fn unknown_function() {
        let err = eval_str("sine(1)").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<kind::UndefinedFunction>().unwrap();
        assert!(kind.suggestions.contains(&"sin".to_string()));
    }
}
