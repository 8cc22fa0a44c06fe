//! Shared error reporting for the workspace.
//!
//! Every user-facing failure is an [`Error`] carrying the source regions it
//! originated from, plus a boxed [`ErrorKind`] that knows how to build an
//! [`ariadne`] report for those regions.

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color used to highlight expressions in error messages.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while parsing an equation or
/// propagating uncertainty through it.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as an [`Any`] so callers can downcast to the
    /// concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error kind.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// A general error type, associating an [`ErrorKind`] with the regions of the
/// source that caused it.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            spans,
            kind: Box::new(kind),
        }
    }

    /// Anchors this error to the given span if it has none of its own.
    ///
    /// Errors raised while operating on symbolic expressions carry no spans,
    /// since symbolic expressions do not remember where in the source they
    /// came from. This attaches the span of the expression they were derived
    /// from so the report still points somewhere useful.
    pub fn with_fallback_span(mut self, span: Range<usize>) -> Self {
        if self.spans.is_empty() {
            self.spans.push(span);
        }
        self
    }

    /// Builds the report for this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

/// Implements [`ErrorKind`] for a type.
///
/// The `message` and `labels` expressions can refer to the fields of the type
/// through `self`; invocations doing so must pass the `self` token after the
/// type name (`error_kind!(Kind, self { ... })`) so the expressions share the
/// macro's hygiene context. Each label is paired with the corresponding span
/// of the error; empty label strings produce an unlabeled highlight.
#[macro_export]
macro_rules! error_kind {
    ($name:ty {
        message: $message:expr,
        labels: [$($label:expr),* $(,)?]
        $(, help: $help:expr)? $(,)?
    }) => {
        $crate::error_kind!($name, self {
            message: $message,
            labels: [$($label),*]
            $(, help: $help)?
        });
    };
    ($name:ty, $self:ident {
        message: $message:expr,
        labels: [$($label:expr),* $(,)?]
        $(, help: $help:expr)? $(,)?
    }) => {
        impl $crate::ErrorKind for $name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn build_report<'a>(
                &$self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                let labels: ::std::vec::Vec<::std::string::String> =
                    ::std::vec![$(::std::string::ToString::to_string(&$label)),*];
                let mut builder = ::ariadne::Report::build(
                    ::ariadne::ReportKind::Error,
                    src_id,
                    spans.first().map_or(0, |span| span.start),
                )
                    .with_message($message)
                    .with_labels(labels.into_iter().zip(spans.iter()).map(|(text, span)| {
                        let label = ::ariadne::Label::new((src_id, span.clone()))
                            .with_color($crate::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    }));
                $(builder.set_help($help);)?
                builder.finish()
            }
        }
    };
}
