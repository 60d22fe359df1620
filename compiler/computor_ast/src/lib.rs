//! Data model for polynomial equations.
//!
//! This crate defines the terms and coefficient maps produced by the parser,
//! and the solutions produced by the solver, along with JSON helpers for both.

pub mod number;
pub mod polynomial;
pub mod solution;

// Re-export commonly used types
pub use number::format_number;
pub use polynomial::{Equation, Exponent, Polynomial, Span, Term};
pub use solution::{Complex, Root, Solution, SolutionKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::error::Error;

/// A result type for serialization helpers.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes a model value to a pretty-printed JSON string.
///
/// # Example
///
/// ```
/// use computor_ast::{to_json, Polynomial};
///
/// let reduced = Polynomial::from([(0, 4.0), (2, -9.3)]);
/// let json = to_json(&reduced).unwrap();
///
/// assert!(json.contains(r#""0": 4.0"#));
/// assert!(json.contains(r#""2": -9.3"#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a model value from a JSON string.
///
/// # Examples
///
/// ```
/// use computor_ast::{from_json, Polynomial};
///
/// let p: Polynomial = from_json(r#"{"1": -2.0, "0": 1.0}"#).unwrap();
/// assert_eq!(p.coefficient(1), -2.0);
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
