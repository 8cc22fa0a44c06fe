//! LaTeX formatting for expressions.

use std::fmt::{Display, Formatter, Result, Write};
use super::{expr::Expr, token::op::BinOpKind};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Greek letter names that render as LaTeX commands when used as variable names.
const GREEK: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi", "psi",
    "omega",
];

/// Returns the LaTeX command for the given name, if it is a greek letter name. Capitalized names
/// map to the capitalized commands (`Omega` becomes `\Omega`).
fn greek(name: &str) -> Option<String> {
    if GREEK.contains(&name) {
        return Some(format!("\\{name}"));
    }

    let mut chars = name.chars();
    let first = chars.next()?;
    if first.is_ascii_uppercase() {
        let lower = format!("{}{}", first.to_ascii_lowercase(), chars.as_str());
        if GREEK.contains(&lower.as_str()) {
            return Some(format!("\\{name}"));
        }
    }

    None
}

fn fmt_mapped<W: Write>(f: &mut W, piece: &str) -> Result {
    match greek(piece) {
        Some(command) => f.write_str(&command),
        None => f.write_str(piece),
    }
}

/// Writes a variable name as LaTeX. Greek letter names are mapped to their commands, and a name
/// of the form `base_sub` is rendered as a subscript, with the mapping applied to both pieces:
/// `theta` becomes `\theta`, and `delta_R` becomes `\delta_{R}`.
pub fn fmt_symbol<W: Write>(f: &mut W, name: &str) -> Result {
    match name.split_once('_') {
        Some((base, sub)) if !base.is_empty() && !sub.is_empty() => {
            fmt_mapped(f, base)?;
            f.write_str("_{")?;
            fmt_mapped(f, sub)?;
            f.write_str("}")
        },
        _ => fmt_mapped(f, name),
    }
}

/// Renders a variable name to an owned LaTeX string. See [`fmt_symbol`].
pub fn symbol_to_latex(name: &str) -> String {
    let mut out = String::new();
    fmt_symbol(&mut out, name).unwrap();
    out
}

/// Writes a function call as LaTeX, using the conventional operator name where one exists.
pub fn fmt_call<T: Latex>(f: &mut Formatter, name: &str, args: &[T]) -> Result {
    fn fmt_args<T: Latex>(f: &mut Formatter, args: &[T]) -> Result {
        for (i, arg) in args.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            arg.fmt_latex(f)?;
        }
        Ok(())
    }

    match name {
        "sqrt" => {
            write!(f, "\\sqrt{{")?;
            fmt_args(f, args)?;
            write!(f, "}}")
        },
        "exp" | "log" | "ln" | "sin" | "cos" | "tan" | "sinh" | "cosh" | "tanh" => {
            write!(f, "\\{name}\\left(")?;
            fmt_args(f, args)?;
            write!(f, "\\right)")
        },
        "asin" | "acos" | "atan" => {
            write!(f, "\\arc{}\\left(", &name[1..])?;
            fmt_args(f, args)?;
            write!(f, "\\right)")
        },
        _ => {
            write!(f, "\\mathrm{{ {name} }} \\left(")?;
            fmt_args(f, args)?;
            write!(f, "\\right)")
        },
    }
}

/// Helper to format powers.
pub fn fmt_pow(f: &mut Formatter, left: &Expr, right: &Expr) -> Result {
    let left = left.innermost();
    let mut insert_with_paren = || {
        write!(f, "\\left(")?;
        left.fmt_latex(f)?;
        write!(f, "\\right)")
    };

    match left {
        Expr::Unary(unary)
            if unary.op.precedence() <= BinOpKind::Exp.precedence() => insert_with_paren(),
        // NOTE: exp is the highest precedence binary operator, so this check is not necessary,
        // but is just here for completeness
        Expr::Binary(binary)
            if binary.op.precedence() <= BinOpKind::Exp.precedence() => insert_with_paren(),
        _ => left.fmt_latex(f),
    }?;

    write!(f, "^{{")?;
    right.innermost().fmt_latex(f)?;
    write!(f, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parser::Parser;

    #[test]
    fn fmt_display() {
        let mut parser = Parser::new("3 * x + 6");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let fmt = format!("{}", expr);

        assert_eq!(fmt, "3*x+6");
    }

    #[test]
    fn fmt_latex() {
        let mut parser = Parser::new("sqrt(3 * x)^2");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let fmt = format!("{}", expr.as_display());

        assert_eq!(fmt, "\\sqrt{3 \\cdot x}^{2}");
    }

    #[test]
    fn fmt_latex_fractions() {
        let mut parser = Parser::new("1/x + 5/x^2");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let fmt = format!("{}", expr.as_display());

        assert_eq!(fmt, "\\frac{1}{x}+\\frac{5}{x^{2}}");
    }

    #[test]
    fn fmt_latex_call() {
        let mut parser = Parser::new("atan(y / x)");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let fmt = format!("{}", expr.as_display());

        assert_eq!(fmt, "\\arctan\\left(\\frac{y}{x}\\right)");
    }

    #[test]
    fn fmt_latex_exp_grouping() {
        let mut parser = Parser::new("(a + b)^2");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        let fmt = format!("{}", expr.as_display());

        assert_eq!(fmt, "\\left(a+b\\right)^{2}");
    }

    #[test]
    fn symbol_names() {
        assert_eq!(symbol_to_latex("theta"), "\\theta");
        assert_eq!(symbol_to_latex("delta_R"), "\\delta_{R}");
        assert_eq!(symbol_to_latex("Omega"), "\\Omega");
        assert_eq!(symbol_to_latex("t"), "t");
        assert_eq!(symbol_to_latex("v_avg"), "v_{avg}");
    }
}
