//! Step-by-step LaTeX derivations of a propagation.
//!
//! A derivation is six lines of LaTeX showing the calculation the way it would be written up in
//! a lab report: the equation, the quadrature formula, the formula with the symbolic partials
//! substituted in, the same with the measured values in place, the raw uncertainty, and the
//! rounded final answer.

use crate::error::kind;
use crate::propagate::Propagation;
use crate::round::Rounded;
use unc_compute::primitive::{float, int};
use unc_compute::symbolic::{Primary, SymExpr};
use unc_error::Error;
use unc_parser::parser::fmt::{symbol_to_latex, LatexFormatter};
use unc_parser::parser::literal::LitSym;
use unc_parser::parser::Parser;

/// A rendered derivation.
#[derive(Debug, Clone)]
pub struct Derivation {
    /// The unrounded central value.
    pub value: f64,

    /// The unrounded propagated uncertainty.
    pub uncertainty: f64,

    /// The rounded result shown on the final line.
    pub rounded: Rounded,

    lines: [String; 6],
}

/// Builds the term `(partial * delta)^2` of a quadrature sum, dropping a `1` in front of the
/// delta when the partial derivative is trivial.
fn quadrature_term(partial: &SymExpr, delta: SymExpr) -> SymExpr {
    let base = match partial {
        SymExpr::Primary(Primary::Integer(n)) if *n == 1 => delta,
        _ => partial.clone() * delta,
    };
    SymExpr::Exp(Box::new(base), Box::new(SymExpr::Primary(Primary::Integer(int(2)))))
}

impl Derivation {
    /// Renders the derivation of the given propagation.
    ///
    /// `result` names the symbol whose uncertainty was calculated; when it is [`None`] the
    /// derivation reads `f(x)`.
    pub fn new(propagation: &Propagation, result: Option<&str>) -> Result<Derivation, Error> {
        let name = match result {
            Some(result) => {
                let symbol = Parser::new(result).try_parse_full::<LitSym>().map_err(|_| {
                    Error::new(
                        vec![propagation.ast.span()],
                        kind::InvalidVariableName { name: result.to_string() },
                    )
                })?;
                symbol_to_latex(&symbol.name)
            },
            None => "f(x)".to_string(),
        };
        let rounded = propagation.rounded()?;

        let equation = format!("{name} = {}", LatexFormatter(&propagation.ast));

        let mut quadrature = format!("\\delta_{{{name}}} &= \\sqrt{{");
        for variable in &propagation.variables {
            let variable = symbol_to_latex(variable);
            quadrature.push_str(&format!(
                "\\left(\\frac{{\\partial_{{{name}}}}}{{\\partial_{{{variable}}}}}\\right)^2 \
                    (\\delta_{{{variable}}})^2 + ",
            ));
        }
        quadrature.truncate(quadrature.len() - 2);
        quadrature.push_str("} \\\\");

        let symbolic: Vec<SymExpr> = propagation
            .variables
            .iter()
            .zip(&propagation.partials)
            .map(|(variable, partial)| {
                let delta = SymExpr::Primary(Primary::Symbol(format!("delta_{variable}")));
                quadrature_term(partial, delta)
            })
            .collect();
        let partials = format!(
            "&= \\sqrt{{{}}} \\\\",
            LatexFormatter(&SymExpr::Add(symbolic).downgrade()),
        );

        let numeric: Vec<SymExpr> = propagation
            .substituted
            .iter()
            .zip(&propagation.measurements)
            .map(|(substituted, measurement)| {
                let delta = SymExpr::Primary(Primary::Float(float(measurement.uncertainty)));
                quadrature_term(substituted, delta)
            })
            .collect();
        let values = format!(
            "&= \\sqrt{{{}}} \\\\",
            LatexFormatter(&SymExpr::Add(numeric).downgrade()),
        );

        let raw = format!("&= {} \\\\", propagation.uncertainty);

        let decimals = rounded.decimals();
        let along = format!(
            "\\therefore {name} &= ({value:.decimals$}\\pm{uncertainty:.decimals$})",
            value = rounded.value,
            uncertainty = rounded.uncertainty,
        );
        // an uncertainty below one drops its leading zero: (1.12\pm.05)
        let along = along.replace("m0.", "m.");

        Ok(Derivation {
            value: propagation.value,
            uncertainty: propagation.uncertainty,
            rounded,
            lines: [equation, quadrature, partials, values, raw, along],
        })
    }

    /// The six lines of the derivation, in order: the equation, the quadrature formula, the
    /// symbolic partials, the substituted values, the raw uncertainty, and the rounded result.
    pub fn lines(&self) -> &[String; 6] {
        &self.lines
    }

    /// Renders the derivation as a LaTeX document fragment: the equation in an `equation`
    /// environment, followed by the remaining lines in an `align` environment.
    pub fn to_document(&self) -> String {
        let mut out = vec![
            "\\begin{equation}".to_string(),
            self.lines[0].clone(),
            "\\end{equation}".to_string(),
            "\\begin{align}".to_string(),
        ];
        out.extend(self.lines[1..].iter().cloned());
        out.push("\\end{align}".to_string());
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::propagate::{propagate, Measurement};
    use super::*;

    fn derive(equation: &str, variables: &str, measurements: &[[f64; 2]], result: Option<&str>) -> Derivation {
        let measurements: Vec<Measurement> =
            measurements.iter().map(|&pair| pair.into()).collect();
        let propagation = propagate(equation, variables, &measurements).unwrap();
        Derivation::new(&propagation, result).unwrap()
    }

    #[test]
    fn quadratic() {
        let derivation = derive("t^2", "t", &[[1.3, 0.2]], None);
        assert_eq!(derivation.lines(), &[
            "f(x) = t^{2}".to_string(),
            "\\delta_{f(x)} &= \\sqrt{\\left(\\frac{\\partial_{f(x)}}{\\partial_{t}}\\right)^2 \
                (\\delta_{t})^2 } \\\\".to_string(),
            "&= \\sqrt{\\left(2 \\cdot t \\cdot \\delta_{t}\\right)^{2}} \\\\".to_string(),
            "&= \\sqrt{\\left(2 \\cdot 1.3 \\cdot 0.2\\right)^{2}} \\\\".to_string(),
            "&= 0.52 \\\\".to_string(),
            "\\therefore f(x) &= (1.7\\pm.5)".to_string(),
        ]);
    }

    #[test]
    fn small_uncertainties_drop_the_leading_zero() {
        let derivation = derive("a - b", "a,b", &[[2.0, 0.03], [0.88, 0.04]], None);
        assert_eq!(
            derivation.lines()[5],
            "\\therefore f(x) &= (1.12\\pm.05)",
        );
    }

    #[test]
    fn trivial_partials_drop_the_one() {
        let derivation = derive("a - b", "a,b", &[[2.0, 0.03], [0.88, 0.04]], None);
        assert_eq!(
            derivation.lines()[2],
            "&= \\sqrt{\\delta_{a}^{2} + \\left(-\\delta_{b}\\right)^{2}} \\\\",
        );
    }

    #[test]
    fn named_result() {
        let derivation = derive("1/T", "T", &[[0.2, 0.012]], Some("nu"));
        assert_eq!(derivation.lines()[0], "\\nu = \\frac{1}{T}");
        assert!(derivation.lines()[1].starts_with("\\delta_{\\nu} &= \\sqrt{"));
        assert_eq!(derivation.lines()[5], "\\therefore \\nu &= (5.0\\pm.3)");
    }

    #[test]
    fn quadrature_line_names_every_variable() {
        let derivation = derive(
            "sqrt(R * g * tan(theta))",
            "R, g, theta",
            &[[6.85, 0.12], [9.81, 0.1], [0.7504926785, 0.0139626]],
            Some("v"),
        );
        assert_eq!(
            derivation.lines()[1],
            "\\delta_{v} &= \\sqrt{\
                \\left(\\frac{\\partial_{v}}{\\partial_{R}}\\right)^2 (\\delta_{R})^2 + \
                \\left(\\frac{\\partial_{v}}{\\partial_{g}}\\right)^2 (\\delta_{g})^2 + \
                \\left(\\frac{\\partial_{v}}{\\partial_{\\theta}}\\right)^2 \
                (\\delta_{\\theta})^2 } \\\\",
        );
    }

    #[test]
    fn document_wraps_the_lines() {
        let derivation = derive("t^2", "t", &[[1.3, 0.2]], None);
        let document = derivation.to_document();
        let lines: Vec<&str> = document.lines().collect();
        assert_eq!(lines[0], "\\begin{equation}");
        assert_eq!(lines[1], "f(x) = t^{2}");
        assert_eq!(lines[2], "\\end{equation}");
        assert_eq!(lines[3], "\\begin{align}");
        assert_eq!(lines.last().unwrap(), &"\\end{align}");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn rejects_a_non_symbol_result() {
        let measurements = [Measurement { value: 1.3, uncertainty: 0.2 }];
        let propagation = propagate("t^2", "t", &measurements).unwrap();
        let err = Derivation::new(&propagation, Some("2x")).unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<kind::InvalidVariableName>().is_some());
        assert_eq!(err.spans, vec![0..3]);
    }
}
