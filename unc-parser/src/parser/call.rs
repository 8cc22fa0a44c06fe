use std::fmt::{Display, Formatter};
use std::ops::Range;
use crate::tokenizer::TokenKind;
use super::{
    error::{kind, Error},
    expr::Expr,
    fmt::{fmt_call, Latex},
    literal::LitSym,
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};

/// A function call, such as `sqrt(2 * x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The name of the function.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let open = input.try_parse::<OpenParen>()?;

        let args = match input.try_parse_delimited::<Expr>(TokenKind::Comma) {
            Ok(args) => args,
            Err(err) if err.fatal => return Err(err),
            Err(_) => Vec::new(),
        };

        let close = input.try_parse::<CloseParen>().map_err(|_| {
            Error::new_fatal(vec![open.span.clone()], kind::UnclosedParenthesis { opening: true })
        })?;

        Ok(Self {
            span: name.span.start..close.span.end,
            name,
            args,
        })
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}(", self.name.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl Latex for Call {
    fn fmt_latex(&self, f: &mut Formatter) -> std::fmt::Result {
        fmt_call(f, &self.name.name, &self.args)
    }
}
