//! The kinds of errors that can occur while differentiating or evaluating an expression.

use ariadne::Fmt;
use unc_error::{error_kind, EXPR};

fn did_you_mean(suggestions: &[String]) -> String {
    format!(
        "did you mean: {}",
        suggestions
            .iter()
            .map(|name| format!("`{}`", name.as_str().fg(EXPR)))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// An expression referenced a variable that has no value.
#[derive(Debug, Clone, PartialEq)]
pub struct UndefinedVariable {
    /// The name of the variable.
    pub name: String,

    /// Declared variable names similar to the one that was found.
    pub suggestions: Vec<String>,
}

error_kind!(UndefinedVariable, self {
    message: format!("`{}` is not defined", self.name),
    labels: ["this variable"],
    help: if self.suggestions.is_empty() {
        "every variable in the equation must appear in the variable list".to_string()
    } else {
        did_you_mean(&self.suggestions)
    },
});

/// An expression called a function that does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct UndefinedFunction {
    /// The name of the function.
    pub name: String,

    /// Built-in function names similar to the one that was found.
    pub suggestions: Vec<String>,
}

error_kind!(UndefinedFunction, self {
    message: format!("the `{}` function does not exist", self.name),
    labels: ["this function"],
    help: if self.suggestions.is_empty() {
        "there is no built-in function with this name".to_string()
    } else {
        did_you_mean(&self.suggestions)
    },
});

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidArgumentCount {
    /// The name of the function.
    pub name: String,

    /// The number of arguments that were given.
    pub given: usize,
}

error_kind!(InvalidArgumentCount, self {
    message: format!("the `{}` function takes exactly one argument", self.name),
    labels: [format!("found {} arguments here", self.given)],
});

/// A denominator evaluated to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionByZero;

error_kind!(DivisionByZero {
    message: "cannot divide by zero",
    labels: ["a denominator in this expression evaluates to zero"],
});

/// The expression evaluated to NaN or infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct NotFinite;

error_kind!(NotFinite {
    message: "the expression does not evaluate to a finite number",
    labels: ["this expression"],
    help: "check for a negative argument to `sqrt` or `log`, or a pole at the supplied values",
});
