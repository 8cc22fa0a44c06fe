use std::fmt::{Display, Formatter};
use std::ops::Range;
use crate::try_parse_catch_fatal;
use super::{
    binary::Binary,
    call::Call,
    error::Error,
    fmt::Latex,
    iter::ExprIter,
    literal::Literal,
    paren::Paren,
    unary::Unary,
    Parse,
    Parser,
    Precedence,
};

/// Represents a general expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `sqrt(2 * x)`.
    Call(Call),

    /// A unary operation, i.e. negation.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Returns the innermost expression, unwrapping any number of nested parentheses.
    pub fn innermost(&self) -> &Expr {
        match self {
            Expr::Paren(paren) => paren.innermost(),
            expr => expr,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order.
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Parses an atom: a function call, a literal, or a parenthesized expression.
    pub(crate) fn parse_primary(input: &mut Parser) -> Result<Self, Error> {
        try_parse_catch_fatal!(
            input.try_parse::<Call>().map(Self::Call),
            input.try_parse::<Literal>().map(Self::Literal),
        );
        input.try_parse::<Paren>().map(Self::Paren)
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt_latex(f),
            Expr::Paren(paren) => paren.fmt_latex(f),
            Expr::Call(call) => call.fmt_latex(f),
            Expr::Unary(unary) => unary.fmt_latex(f),
            Expr::Binary(binary) => binary.fmt_latex(f),
        }
    }
}
