//! The kinds of errors that can occur while setting up a propagation.

use ariadne::Fmt;
use unc_error::{error_kind, EXPR};

/// The number of measurements does not match the number of declared variables.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementMismatch {
    /// The number of declared variables.
    pub variables: usize,

    /// The number of measurements that were given.
    pub measurements: usize,
}

error_kind!(MeasurementMismatch, self {
    message: format!(
        "{} variables were declared, but {} measurements were given",
        self.variables,
        self.measurements,
    ),
    labels: ["for this equation"],
    help: "each declared variable needs exactly one `[value, uncertainty]` pair, in the same \
        order as the variable list",
});

/// The same variable was declared more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateVariable {
    /// The name of the variable.
    pub name: String,
}

error_kind!(DuplicateVariable, self {
    message: format!("the variable `{}` is declared more than once", self.name.as_str().fg(EXPR)),
    labels: ["for this equation"],
});

/// A declared variable is not a single symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidVariableName {
    /// The offending entry in the variable list.
    pub name: String,
}

error_kind!(InvalidVariableName, self {
    message: format!("`{}` is not a valid variable name", self.name.as_str().fg(EXPR)),
    labels: ["for this equation"],
    help: "variable names are single symbols, such as `x` or `theta`, separated by commas",
});

/// The uncertainty to round is zero, negative, or not finite.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidUncertainty {
    /// The uncertainty that was given.
    pub uncertainty: f64,
}

error_kind!(InvalidUncertainty, self {
    message: if self.uncertainty == 0.0 {
        "the uncertainty is zero".to_string()
    } else {
        format!("`{}` is not a valid uncertainty", self.uncertainty)
    },
    labels: ["while rounding the result of this equation"],
    help: "uncertainties must be finite and positive; treat an exact quantity as a constant \
        instead of a measured variable",
});
