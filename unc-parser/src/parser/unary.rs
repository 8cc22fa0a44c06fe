use std::fmt::{Display, Formatter};
use std::ops::Range;
use crate::try_parse_catch_fatal;
use super::{
    binary::Binary,
    error::Error,
    expr::Expr,
    fmt::Latex,
    token::op::UnaryOp,
    Parse,
    Parser,
    Precedence,
};

/// A unary operator applied to an operand, i.e. negation.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    /// The operand of the unary operator.
    pub operand: Box<Expr>,

    /// The unary operator.
    pub op: UnaryOp,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or any expression that binds tighter than one.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        try_parse_catch_fatal!(input.try_parse::<Unary>().map(Expr::Unary));
        Expr::parse_primary(input)
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;

        // negation binds tighter than multiplication but looser than exponentiation, so `-x^2`
        // parses as `-(x^2)`
        let lhs = Unary::parse_or_lower(input)?;
        let operand = Binary::parse_expr(input, lhs, op.precedence())?;

        Ok(Self {
            span: op.span.start..operand.span().end,
            operand: Box::new(operand),
            op,
        })
    }
}

impl Display for Unary {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "-{}", self.operand)
    }
}

impl Latex for Unary {
    fn fmt_latex(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "-")?;
        match &*self.operand {
            // `-(a + b)` must keep its grouping
            Expr::Binary(binary) if binary.op.precedence() < Precedence::Neg => {
                write!(f, "\\left(")?;
                self.operand.fmt_latex(f)?;
                write!(f, "\\right)")
            },
            _ => self.operand.fmt_latex(f),
        }
    }
}
