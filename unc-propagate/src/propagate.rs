//! The quadrature propagation itself.

use crate::error::kind;
use crate::round::{round_uncertainty, Rounded};
use unc_compute::consts;
use unc_compute::error::{kind as compute_kind, suggestions};
use unc_compute::funcs;
use unc_compute::primitive::float;
use unc_compute::symbolic::{derivative, evaluate, Primary, SymExpr};
use unc_error::Error;
use unc_parser::parser::{expr::Expr as AstExpr, literal::Literal, literal::LitSym, Parser};

/// A measured quantity: a central value and its absolute uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// The measured central value.
    pub value: f64,

    /// The absolute uncertainty of the measurement.
    pub uncertainty: f64,
}

impl From<[f64; 2]> for Measurement {
    fn from([value, uncertainty]: [f64; 2]) -> Self {
        Self { value, uncertainty }
    }
}

/// The result of propagating uncertainties through an equation, along with the symbolic
/// intermediates needed to render a step-by-step derivation.
#[derive(Debug, Clone)]
pub struct Propagation {
    /// The parsed equation, as written.
    pub ast: AstExpr,

    /// The declared variables, in declaration order.
    pub variables: Vec<String>,

    /// The measurements, in the same order as [`Self::variables`].
    pub measurements: Vec<Measurement>,

    /// The symbolic partial derivative of the equation with respect to each variable.
    pub partials: Vec<SymExpr>,

    /// Each partial derivative with the measured central values substituted in, unevaluated.
    pub substituted: Vec<SymExpr>,

    /// The central value of the equation at the measured values.
    pub value: f64,

    /// The propagated uncertainty.
    pub uncertainty: f64,
}

impl Propagation {
    /// Rounds the value and uncertainty for presentation.
    pub fn rounded(&self) -> Result<Rounded, Error> {
        round_uncertainty(self.value, self.uncertainty)
            .map_err(|err| err.with_fallback_span(self.ast.span()))
    }
}

/// Parses a comma-separated variable list, such as `R, g, theta`, into variable names.
///
/// Each entry must be a single symbol, and no symbol may be declared twice.
pub fn parse_variables(variables: &str) -> Result<Vec<String>, Error> {
    let mut names: Vec<String> = Vec::new();
    for piece in variables.split(',') {
        let piece = piece.trim();
        let symbol = Parser::new(piece).try_parse_full::<LitSym>().map_err(|_| {
            Error::new(vec![], kind::InvalidVariableName { name: piece.to_string() })
        })?;
        if names.contains(&symbol.name) {
            return Err(Error::new(vec![], kind::DuplicateVariable { name: symbol.name }));
        }
        names.push(symbol.name);
    }
    Ok(names)
}

/// Checks every symbol and function call in the equation before any evaluation happens, so
/// errors point at the offending span in the source.
///
/// A symbol must be a declared variable or a built-in constant; declared variables shadow the
/// constants. A called function must be built-in and take the right number of arguments.
fn validate(ast: &AstExpr, variables: &[String]) -> Result<(), Error> {
    for node in ast.post_order_iter() {
        match node {
            AstExpr::Literal(Literal::Symbol(symbol)) => {
                let declared = variables.iter().any(|variable| *variable == symbol.name);
                if !declared && consts::resolve(&symbol.name).is_none() {
                    let candidates = variables
                        .iter()
                        .map(String::as_str)
                        .chain(consts::NAMES.iter().copied());
                    return Err(Error::new(
                        vec![symbol.span.clone()],
                        compute_kind::UndefinedVariable {
                            name: symbol.name.clone(),
                            suggestions: suggestions(&symbol.name, candidates),
                        },
                    ));
                }
            },
            AstExpr::Call(call) => {
                if funcs::lookup(&call.name.name).is_none() {
                    return Err(Error::new(
                        vec![call.name.span.clone()],
                        compute_kind::UndefinedFunction {
                            name: call.name.name.clone(),
                            suggestions: funcs::similar_names(&call.name.name),
                        },
                    ));
                }
                if call.args.len() != 1 {
                    return Err(Error::new(
                        vec![call.span.clone()],
                        compute_kind::InvalidArgumentCount {
                            name: call.name.name.clone(),
                            given: call.args.len(),
                        },
                    ));
                }
            },
            _ => (),
        }
    }
    Ok(())
}

/// Propagates measurement uncertainties through the given equation by quadrature.
///
/// `variables` is a comma-separated list of the symbols in the equation, and `measurements`
/// supplies a value and uncertainty for each, in the same order. Because the quadrature sum adds
/// the squared contributions of independent variables, the result does not depend on the order
/// the variables are declared in.
pub fn propagate(
    equation: &str,
    variables: &str,
    measurements: &[Measurement],
) -> Result<Propagation, Error> {
    let fallback = 0..equation.len();
    let variables = parse_variables(variables)
        .map_err(|err| err.with_fallback_span(fallback.clone()))?;
    if variables.len() != measurements.len() {
        return Err(Error::new(vec![fallback], kind::MeasurementMismatch {
            variables: variables.len(),
            measurements: measurements.len(),
        }));
    }

    let ast = Parser::new(equation).try_parse_full::<AstExpr>()?;
    validate(&ast, &variables)?;
    let expr = SymExpr::from(ast.clone());
    let substitute_all = |expr: &SymExpr| {
        let mut expr = expr.clone();
        for (name, measurement) in variables.iter().zip(measurements) {
            let value = SymExpr::Primary(Primary::Float(float(measurement.value)));
            expr = expr.substitute(name, &value);
        }
        expr
    };

    let value = evaluate(&substitute_all(&expr))
        .map_err(|err| err.with_fallback_span(fallback.clone()))?;

    let mut partials = Vec::with_capacity(variables.len());
    let mut substituted = Vec::with_capacity(variables.len());
    let mut sum = float(0);
    for (name, measurement) in variables.iter().zip(measurements) {
        let partial = derivative(&expr, name)
            .map_err(|err| err.with_fallback_span(fallback.clone()))?;
        let at_values = substitute_all(&partial);
        let slope = evaluate(&at_values)
            .map_err(|err| err.with_fallback_span(fallback.clone()))?;
        sum += (slope * float(measurement.uncertainty)).square();
        partials.push(partial);
        substituted.push(at_values);
    }
    let uncertainty = sum.sqrt();

    Ok(Propagation {
        ast,
        variables,
        measurements: measurements.to_vec(),
        partials,
        substituted,
        value: value.to_f64(),
        uncertainty: uncertainty.to_f64(),
    })
}
