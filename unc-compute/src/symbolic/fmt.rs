//! LaTeX rendering for symbolic expressions.
//!
//! Because division is desugared into negative powers, a product renders as `\frac` whenever
//! some of its factors carry a negative numeric exponent; those factors form the denominator
//! with their exponents flipped. A half power renders as `\sqrt`, matching the form the
//! derivative of `sqrt` produces.

use crate::primitive::rational;
use std::fmt::Formatter;
use unc_parser::parser::fmt::{fmt_call, fmt_symbol, Latex};
use super::expr::{Primary, SymExpr};

impl Latex for Primary {
    fn fmt_latex(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Primary::Integer(n) => write!(f, "{}", n),
            Primary::Rational(n) => {
                if *n.denom() == 1 {
                    write!(f, "{}", n.numer())
                } else if *n.numer() < 0 {
                    write!(f, "-\\frac{{{}}}{{{}}}", n.numer().clone().abs(), n.denom())
                } else {
                    write!(f, "\\frac{{{}}}{{{}}}", n.numer(), n.denom())
                }
            },
            Primary::Float(n) => write!(f, "{}", n.to_f64()),
            Primary::Symbol(name) => fmt_symbol(f, name),
            Primary::Call(name, args) => fmt_call(f, name, args),
        }
    }
}

/// Returns true if the expression is a literal one.
fn is_one(expr: &SymExpr) -> bool {
    match expr {
        SymExpr::Primary(Primary::Integer(n)) => *n == 1,
        SymExpr::Primary(Primary::Rational(n)) => *n == 1,
        SymExpr::Primary(Primary::Float(n)) => *n == 1,
        _ => false,
    }
}

/// Returns true if the primary is a negative number.
fn is_negative_number(primary: &Primary) -> bool {
    match primary {
        Primary::Integer(n) => *n < 0,
        Primary::Rational(n) => *n < 0,
        Primary::Float(n) => n.is_sign_negative() && !n.is_zero(),
        _ => false,
    }
}

/// If the factor is a power with a negative numeric exponent, returns the expression it
/// contributes to the denominator of a fraction, with the exponent flipped positive.
fn denominator_part(factor: &SymExpr) -> Option<SymExpr> {
    let SymExpr::Exp(base, exponent) = factor else {
        return None;
    };
    let flipped = match &**exponent {
        SymExpr::Primary(Primary::Integer(n)) if *n < 0 => {
            SymExpr::Primary(Primary::Integer(-n.clone()))
        },
        SymExpr::Primary(Primary::Rational(n)) if *n < 0 => {
            SymExpr::Primary(Primary::Rational(-n.clone()))
        },
        SymExpr::Primary(Primary::Float(n)) if n.is_sign_negative() && !n.is_zero() => {
            SymExpr::Primary(Primary::Float(-n.clone()))
        },
        _ => return None,
    };
    if is_one(&flipped) {
        Some((**base).clone())
    } else {
        Some(SymExpr::Exp(base.clone(), Box::new(flipped)))
    }
}

/// If the expression is a product with a leading factor of -1, or a negative number, returns its
/// negation. Used to render negated expressions with a minus sign instead of a `-1` factor.
fn strip_leading_neg(expr: &SymExpr) -> Option<SymExpr> {
    match expr {
        SymExpr::Mul(factors) => match factors.first() {
            Some(SymExpr::Primary(Primary::Integer(n))) if *n == -1 => {
                Some(SymExpr::Mul(factors[1..].to_vec()).downgrade())
            },
            _ => None,
        },
        SymExpr::Primary(Primary::Integer(n)) if *n < 0 => {
            Some(SymExpr::Primary(Primary::Integer(-n.clone())))
        },
        SymExpr::Primary(Primary::Rational(n)) if *n < 0 => {
            Some(SymExpr::Primary(Primary::Rational(-n.clone())))
        },
        SymExpr::Primary(Primary::Float(n)) if n.is_sign_negative() && !n.is_zero() => {
            Some(SymExpr::Primary(Primary::Float(-n.clone())))
        },
        _ => None,
    }
}

/// Writes one factor of a product, parenthesizing sums to keep their grouping.
fn fmt_factor(f: &mut Formatter, factor: &SymExpr) -> std::fmt::Result {
    match factor {
        SymExpr::Add(_) => {
            write!(f, "\\left(")?;
            factor.fmt_latex(f)?;
            write!(f, "\\right)")
        },
        SymExpr::Primary(primary) if is_negative_number(primary) => {
            write!(f, "\\left(")?;
            factor.fmt_latex(f)?;
            write!(f, "\\right)")
        },
        _ => factor.fmt_latex(f),
    }
}

/// Writes the factors of a product separated by `\cdot`. An empty product is the literal `1`,
/// which appears when every factor of a fraction moved into the denominator.
fn fmt_product(f: &mut Formatter, factors: &[SymExpr]) -> std::fmt::Result {
    if factors.is_empty() {
        return write!(f, "1");
    }
    for (i, factor) in factors.iter().enumerate() {
        if i != 0 {
            write!(f, " \\cdot ")?;
        }
        fmt_factor(f, factor)?;
    }
    Ok(())
}

impl Latex for SymExpr {
    fn fmt_latex(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SymExpr::Primary(primary) => primary.fmt_latex(f),
            SymExpr::Add(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i == 0 {
                        term.fmt_latex(f)?;
                    } else if let Some(positive) = strip_leading_neg(term) {
                        write!(f, " - ")?;
                        positive.fmt_latex(f)?;
                    } else {
                        write!(f, " + ")?;
                        term.fmt_latex(f)?;
                    }
                }
                Ok(())
            },
            SymExpr::Mul(factors) => {
                // a product negated during differentiation leads with a -1 factor
                if factors.len() > 1 {
                    if let Some(SymExpr::Primary(Primary::Integer(n))) = factors.first() {
                        if *n == -1 {
                            write!(f, "-")?;
                            return SymExpr::Mul(factors[1..].to_vec()).downgrade().fmt_latex(f);
                        }
                    }
                }

                let mut numerator = Vec::new();
                let mut denominator = Vec::new();
                for factor in factors {
                    match denominator_part(factor) {
                        Some(flipped) => denominator.push(flipped),
                        None => numerator.push(factor.clone()),
                    }
                }

                if denominator.is_empty() {
                    fmt_product(f, &numerator)
                } else {
                    write!(f, "\\frac{{")?;
                    fmt_product(f, &numerator)?;
                    write!(f, "}}{{")?;
                    fmt_product(f, &denominator)?;
                    write!(f, "}}")
                }
            },
            SymExpr::Exp(base, exponent) => {
                if matches!(
                    &**exponent,
                    SymExpr::Primary(Primary::Rational(n)) if *n == rational((1, 2)),
                ) {
                    write!(f, "\\sqrt{{")?;
                    base.fmt_latex(f)?;
                    return write!(f, "}}");
                }

                match &**base {
                    SymExpr::Add(_) | SymExpr::Mul(_) | SymExpr::Exp(..) => {
                        write!(f, "\\left(")?;
                        base.fmt_latex(f)?;
                        write!(f, "\\right)")?;
                    },
                    SymExpr::Primary(primary) if is_negative_number(primary) => {
                        write!(f, "\\left(")?;
                        base.fmt_latex(f)?;
                        write!(f, "\\right)")?;
                    },
                    _ => base.fmt_latex(f)?,
                }
                write!(f, "^{{")?;
                exponent.fmt_latex(f)?;
                write!(f, "}}")
            },
        }
    }
}
