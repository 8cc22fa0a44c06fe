//! Error types for the parser.

pub mod kind;

use ariadne::Report;
use std::ops::Range;
use unc_error::ErrorKind;

/// An error that occurred while parsing an equation.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,

    /// Whether the error is fatal. The parser frequently tries multiple ways to parse a piece of
    /// the source; a fatal error short-circuits that search, because continuing could only
    /// produce a worse diagnostic (an unclosed parenthesis, for example).
    pub fatal: bool,
}

impl Error {
    /// Creates a new non-fatal error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            spans,
            kind: Box::new(kind),
            fatal: false,
        }
    }

    /// Creates a new fatal error with the given spans and kind.
    pub fn new_fatal(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            spans,
            kind: Box::new(kind),
            fatal: true,
        }
    }

    /// Builds the report for this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl From<Error> for unc_error::Error {
    fn from(err: Error) -> Self {
        Self {
            spans: err.spans,
            kind: err.kind,
        }
    }
}
