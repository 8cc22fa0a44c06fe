use std::fmt::{Display, Formatter};
use std::ops::Range;
use super::{
    error::{kind, Error},
    expr::Expr,
    fmt::Latex,
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};

/// A parenthesized expression, such as `(1 + 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    /// The expression inside the parentheses.
    pub expr: Box<Expr>,

    /// The region of the source code that this expression was parsed from, including the
    /// parentheses.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the innermost expression, unwrapping any number of nested parentheses.
    pub fn innermost(&self) -> &Expr {
        self.expr.innermost()
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.try_parse::<OpenParen>()?;

        // once the opening parenthesis is consumed, failing to parse the inside is fatal; no
        // other interpretation of the input can succeed
        let expr = input.try_parse::<Expr>().map_err(|mut err| {
            err.fatal = true;
            err
        })?;

        let close = input.try_parse::<CloseParen>().map_err(|_| {
            Error::new_fatal(vec![open.span.clone()], kind::UnclosedParenthesis { opening: true })
        })?;

        Ok(Self {
            expr: Box::new(expr),
            span: open.span.start..close.span.end,
        })
    }
}

impl Display for Paren {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({})", self.expr)
    }
}

impl Latex for Paren {
    fn fmt_latex(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "\\left(")?;
        self.expr.fmt_latex(f)?;
        write!(f, "\\right)")
    }
}
