//! The kinds of errors the parser can produce.

use ariadne::Fmt;
use crate::tokenizer::TokenKind;
use unc_error::{error_kind, EXPR};

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, PartialEq)]
pub struct NonFatal;

error_kind!(NonFatal {
    message: "an internal non-fatal error occurred while parsing",
    labels: ["here"],
    help: "you should never see this error; please report this as a bug",
});

/// The end of the equation was reached unexpectedly.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

error_kind!(UnexpectedEof {
    message: "unexpected end of equation",
    labels: [format!("you might need to add another {} here", "expression".fg(EXPR))],
});

/// The end of the equation was expected, but something else was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

error_kind!(ExpectedEof {
    message: "expected end of equation",
    labels: [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
});

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

error_kind!(UnexpectedToken, self {
    message: "unexpected token",
    labels: [format!(
        "expected one of: {}",
        self.expected
            .iter()
            .map(|t| format!("{:?}", t))
            .collect::<Vec<_>>()
            .join(", "),
    )],
    help: format!("found {:?}", self.found),
});

/// A parenthesis was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

error_kind!(UnclosedParenthesis, self {
    message: "unclosed parenthesis",
    labels: ["this parenthesis is not closed"],
    help: if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
});
