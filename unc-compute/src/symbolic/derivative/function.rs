//! Derivatives of the built-in functions, with the chain rule applied.

use crate::error::kind;
use crate::funcs;
use crate::primitive::{int, rational};
use unc_error::Error;
use super::{derivative, MultBuilder};
use super::super::expr::{Primary, SymExpr};

fn call(name: &str, arg: SymExpr) -> SymExpr {
    SymExpr::Primary(Primary::Call(name.to_string(), vec![arg]))
}

fn ipow(base: SymExpr, power: i32) -> SymExpr {
    SymExpr::Exp(
        Box::new(base),
        Box::new(SymExpr::Primary(Primary::Integer(int(power)))),
    )
}

/// Builds `1 - arg^2` or `1 + arg^2`, the inner expressions of the inverse trigonometric
/// derivatives.
fn one_plus_square(arg: &SymExpr, negate: bool) -> SymExpr {
    let square = ipow(arg.clone(), 2);
    let term = if negate { -square } else { square };
    SymExpr::Add(vec![SymExpr::Primary(Primary::Integer(int(1))), term])
}

/// Computes the derivative of a call to a built-in function, applying the chain rule.
pub(super) fn function_derivative(
    func: &str,
    args: &[SymExpr],
    with: &str,
) -> Result<SymExpr, Error> {
    if args.len() != 1 {
        return Err(Error::new(vec![], kind::InvalidArgumentCount {
            name: func.to_string(),
            given: args.len(),
        }));
    }
    let arg = &args[0];

    // sqrt is rewritten as a half power and handled by the power rule
    if func == "sqrt" {
        let half = SymExpr::Primary(Primary::Rational(rational((1, 2))));
        return derivative(&SymExpr::Exp(Box::new(arg.clone()), Box::new(half)), with);
    }

    let outer = match func {
        "exp" => call("exp", arg.clone()),
        "log" | "ln" => ipow(arg.clone(), -1),
        "sin" => call("cos", arg.clone()),
        "cos" => -call("sin", arg.clone()),
        "tan" => ipow(call("cos", arg.clone()), -2),
        "asin" => SymExpr::Exp(
            Box::new(one_plus_square(arg, true)),
            Box::new(SymExpr::Primary(Primary::Rational(-rational((1, 2))))),
        ),
        "acos" => -SymExpr::Exp(
            Box::new(one_plus_square(arg, true)),
            Box::new(SymExpr::Primary(Primary::Rational(-rational((1, 2))))),
        ),
        "atan" => ipow(one_plus_square(arg, false), -1),
        "sinh" => call("cosh", arg.clone()),
        "cosh" => call("sinh", arg.clone()),
        "tanh" => ipow(call("cosh", arg.clone()), -2),
        _ => {
            return Err(Error::new(vec![], kind::UndefinedFunction {
                name: func.to_string(),
                suggestions: funcs::similar_names(func),
            }));
        },
    };

    let mut mult = MultBuilder::default();
    mult.mult(derivative(arg, with)?);
    mult.mult(outer);
    Ok(mult.into())
}
