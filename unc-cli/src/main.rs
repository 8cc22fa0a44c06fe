//! Command-line uncertainty propagation.
//!
//! ```text
//! unc --eq "sqrt(R * g * tan(theta))" --vars "R,g,theta" \
//!     --values "[[6.85,0.12],[9.81,0.1],[43,0.8]]" --degrees 2 --result v
//! ```
//!
//! Prints the step-by-step derivation as a LaTeX fragment, and optionally appends it to a file
//! for pasting into a lab report.

use ariadne::Source;
use clap::Parser;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use unc_compute::funcs::angle;
use unc_compute::primitive::float;
use unc_propagate::{propagate, Derivation, Measurement};

/// Propagates measurement uncertainties through an equation by quadrature and prints the
/// derivation as LaTeX.
#[derive(Parser)]
#[command(name = "unc", version, about)]
struct Cli {
    /// The equation to propagate uncertainties through, such as "sqrt(R * g * tan(theta))".
    #[arg(long)]
    eq: String,

    /// Comma-separated list of the variables appearing in the equation, such as "R,g,theta".
    #[arg(long)]
    vars: String,

    /// The measured values and their uncertainties, as a JSON array of pairs in the same order
    /// as the variables: "[[6.85,0.12],[9.81,0.1]]".
    #[arg(long)]
    values: String,

    /// Zero-based indices of measurements given in degrees, to be converted to radians before
    /// propagating.
    #[arg(long, value_delimiter = ',')]
    degrees: Vec<usize>,

    /// The symbol whose uncertainty is being calculated. The derivation reads "f(x)" if omitted.
    #[arg(long)]
    result: Option<String>,

    /// Also appends the derivation to this file.
    #[arg(long)]
    fp: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let pairs: Vec<[f64; 2]> = match serde_json::from_str(&cli.values) {
        Ok(pairs) => pairs,
        Err(err) => {
            eprintln!("error: --values is not a JSON array of [value, uncertainty] pairs: {err}");
            return ExitCode::FAILURE;
        },
    };
    let mut measurements: Vec<Measurement> = pairs.into_iter().map(Measurement::from).collect();

    for &index in &cli.degrees {
        let Some(measurement) = measurements.get_mut(index) else {
            eprintln!(
                "error: --degrees index {index} is out of range for {} measurements",
                measurements.len(),
            );
            return ExitCode::FAILURE;
        };
        measurement.value = angle::dtr(float(measurement.value)).to_f64();
        measurement.uncertainty = angle::dtr(float(measurement.uncertainty)).to_f64();
    }

    let derivation = propagate(&cli.eq, &cli.vars, &measurements)
        .and_then(|propagation| Derivation::new(&propagation, cli.result.as_deref()));
    let derivation = match derivation {
        Ok(derivation) => derivation,
        Err(err) => {
            err.build_report("equation")
                .eprint(("equation", Source::from(cli.eq.clone())))
                .unwrap();
            return ExitCode::FAILURE;
        },
    };

    let document = derivation.to_document();
    println!("{document}");

    if let Some(path) = &cli.fp {
        // append, so repeated runs collect their derivations in one file
        let written = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "{document}\n"));
        if let Err(err) = written {
            eprintln!("error: could not write to {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
