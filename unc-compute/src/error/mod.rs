//! Errors raised while working with symbolic expressions.

pub mod kind;

use levenshtein::levenshtein;
pub use unc_error::Error;

/// Returns the candidates that are similar to the given name, measured by Levenshtein distance.
/// Used for "did you mean" suggestions against a caller-supplied set of names.
pub fn suggestions<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .map(|candidate| candidate.to_string())
        .collect()
}
