//! Unit structs representing each kind of token, parsable from a [`Parser`].

pub mod op;

use crate::{
    parser::{
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

macro_rules! token_kinds {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("A `", stringify!($name), "` token.")]
            #[derive(Debug, Clone, PartialEq)]
            pub struct $name {
                /// The raw lexeme that was parsed into this token.
                pub lexeme: String,

                /// The region of the source code that this token originated from.
                pub span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    let token = input.next_token()?;
                    if token.kind == TokenKind::$name {
                        Ok(Self {
                            lexeme: token.lexeme.to_string(),
                            span: token.span,
                        })
                    } else {
                        Err(Error::new(vec![token.span], kind::UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds!(
    Add,
    Sub,
    Mul,
    Div,
    Exp,
    Name,
    Comma,
    OpenParen,
    CloseParen,
    Int,
    Float,
);
