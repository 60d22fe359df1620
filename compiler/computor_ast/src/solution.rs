//! Solver results.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::number::format_number;

/// What kind of answer the solver reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolutionKind {
    /// Degree 2, discriminant > 0: two real roots
    Positive,
    /// Degree 2, discriminant == 0: one real root
    Zero,
    /// Degree 2, discriminant < 0: two complex conjugate roots
    Negative,
    /// Degree 1: one real root
    Linear,
    /// `0 = 0`: every real number is a solution
    Infinite,
    /// `c = 0` with `c != 0`: contradiction
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NoSolution,
    /// Degree above 2
    Unsolvable,
}

impl SolutionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolutionKind::Positive => "positive",
            SolutionKind::Zero => "zero",
            SolutionKind::Negative => "negative",
            SolutionKind::Linear => "linear",
            SolutionKind::Infinite => "infinite",
            SolutionKind::NoSolution => "none",
            SolutionKind::Unsolvable => "unsolvable",
        }
    }
}

impl fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimal complex number, only used to carry quadratic roots.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }
}

/// `a + bi` or `a - bi`
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{} + {}i", format_number(self.re), format_number(self.im))
        } else {
            write!(f, "{} - {}i", format_number(self.re), format_number(-self.im))
        }
    }
}

/// A root of the equation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Root {
    Real { value: f64 },
    Complex { value: Complex },
}

impl Root {
    pub fn real(value: f64) -> Self {
        Root::Real { value }
    }

    pub fn complex(re: f64, im: f64) -> Self {
        Root::Complex {
            value: Complex::new(re, im),
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Root::Real { value } => Some(*value),
            Root::Complex { .. } => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex> {
        match self {
            Root::Real { .. } => None,
            Root::Complex { value } => Some(*value),
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Real { value } => f.write_str(&format_number(*value)),
            Root::Complex { value } => write!(f, "{value}"),
        }
    }
}

/// Kind, discriminant (degree 2 only) and ordered roots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    pub kind: SolutionKind,
    pub discriminant: Option<f64>,
    pub roots: Vec<Root>,
}

impl Solution {
    /// A solution with neither discriminant nor roots.
    pub fn bare(kind: SolutionKind) -> Self {
        Self {
            kind,
            discriminant: None,
            roots: Vec::new(),
        }
    }

    pub fn linear(root: f64) -> Self {
        Self {
            kind: SolutionKind::Linear,
            discriminant: None,
            roots: vec![Root::real(root)],
        }
    }

    pub fn quadratic(kind: SolutionKind, discriminant: f64, roots: Vec<Root>) -> Self {
        Self {
            kind,
            discriminant: Some(discriminant),
            roots,
        }
    }
}
