use std::fmt::{Display, Formatter};
use std::ops::Range;
use super::{
    error::{kind, Error},
    expr::Expr,
    fmt::{fmt_pow, Latex},
    token::op::{BinOp, BinOpKind},
    unary::Unary,
    Associativity,
    Parse,
    Parser,
    Precedence,
};

/// A binary operator applied to two operands, such as `1 + 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The binary operator.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Continues parsing a binary expression with the given left-hand side, consuming operators
    /// with at least the given precedence (precedence climbing).
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            let Ok(op) = input.try_parse_then::<BinOp, _>(|op, input| {
                if op.precedence() >= precedence {
                    Ok(())
                } else {
                    Err(input.error(kind::NonFatal))
                }
            }) else {
                break;
            };

            let rhs = Unary::parse_or_lower(input)?;
            lhs = Self::complete_rhs(input, lhs, op, rhs)?;
        }

        Ok(lhs)
    }

    /// Completes the right-hand side of a binary expression: any operator to the right that binds
    /// tighter than `op` (or equally, for right-associative operators) is folded into `rhs` first.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        loop {
            // peek at the next operator without committing to it
            let Ok(next_op) = input.clone().try_parse::<BinOp>() else {
                break;
            };

            if next_op.precedence() > op.precedence()
                || (next_op.precedence() == op.precedence()
                    && next_op.associativity() == Associativity::Right)
            {
                rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
            } else {
                break;
            }
        }

        Ok(Expr::Binary(Self {
            span: lhs.span().start..rhs.span().end,
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }))
    }
}

impl Parse for Binary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        match Self::parse_expr(input, lhs, Precedence::Any)? {
            Expr::Binary(binary) => Ok(binary),
            expr => Err(Error::new(vec![expr.span()], kind::NonFatal)),
        }
    }
}

impl Display for Binary {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.lhs, self.op.kind, self.rhs)
    }
}

impl Latex for Binary {
    fn fmt_latex(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.op.kind {
            BinOpKind::Exp => fmt_pow(f, &self.lhs, &self.rhs),
            BinOpKind::Div => {
                write!(f, "\\frac{{")?;
                self.lhs.innermost().fmt_latex(f)?;
                write!(f, "}}{{")?;
                self.rhs.innermost().fmt_latex(f)?;
                write!(f, "}}")
            },
            BinOpKind::Mul => {
                self.lhs.fmt_latex(f)?;
                write!(f, " \\cdot ")?;
                self.rhs.fmt_latex(f)
            },
            BinOpKind::Add => {
                self.lhs.fmt_latex(f)?;
                write!(f, "+")?;
                self.rhs.fmt_latex(f)
            },
            BinOpKind::Sub => {
                self.lhs.fmt_latex(f)?;
                write!(f, "-")?;
                self.rhs.fmt_latex(f)
            },
        }
    }
}
