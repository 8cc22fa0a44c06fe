//! The built-in functions that can be called from an equation.
//!
//! Every function takes a single argument; the trigonometric functions operate on radians.

pub mod angle;
pub mod power;
pub mod trigonometry;

use levenshtein::levenshtein;
use rug::Float;

/// The names of all built-in functions, in the order they are documented.
pub const NAMES: &[&str] = &[
    "sqrt", "exp", "log", "ln", "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh",
    "tanh",
];

/// Looks up a built-in function by name. `log` and `ln` are both the natural logarithm.
pub fn lookup(name: &str) -> Option<fn(Float) -> Float> {
    Some(match name {
        "sqrt" => power::sqrt,
        "exp" => power::exp,
        "log" | "ln" => power::ln,
        "sin" => trigonometry::sin,
        "cos" => trigonometry::cos,
        "tan" => trigonometry::tan,
        "asin" => trigonometry::asin,
        "acos" => trigonometry::acos,
        "atan" => trigonometry::atan,
        "sinh" => trigonometry::sinh,
        "cosh" => trigonometry::cosh,
        "tanh" => trigonometry::tanh,
        _ => return None,
    })
}

/// Returns the names of built-in functions similar to the given name, measured by Levenshtein
/// distance. Used for "did you mean" suggestions.
pub fn similar_names(name: &str) -> Vec<String> {
    NAMES.iter()
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .map(|candidate| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves() {
        for name in NAMES {
            assert!(lookup(name).is_some(), "`{name}` is listed but does not resolve");
        }
    }

    #[test]
    fn suggestions() {
        assert!(similar_names("sine").contains(&"sin".to_string()));
        assert!(similar_names("sqt").contains(&"sqrt".to_string()));
        assert!(similar_names("frobnicate").is_empty());
    }
}
