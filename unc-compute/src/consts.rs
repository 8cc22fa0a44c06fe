//! Built-in mathematical constants.
//!
//! These evaluate without being declared as variables, unless a declared variable shadows them.

use once_cell::sync::Lazy;
use rug::Float;
use super::primitive::float;

/// The ratio of a circle's circumference to its diameter.
pub static PI: Lazy<Float> = Lazy::new(|| float(-1).acos());

/// Euler's number.
pub static E: Lazy<Float> = Lazy::new(|| float(1).exp());

/// The ratio of a circle's circumference to its radius, equal to two pi.
pub static TAU: Lazy<Float> = Lazy::new(|| float(2) * &*PI);

/// The names of all built-in constants.
pub const NAMES: &[&str] = &["pi", "e", "tau"];

/// Resolves a built-in constant by name.
pub fn resolve(name: &str) -> Option<Float> {
    match name {
        "pi" => Some(PI.clone()),
        "e" => Some(E.clone()),
        "tau" => Some(TAU.clone()),
        _ => None,
    }
}
