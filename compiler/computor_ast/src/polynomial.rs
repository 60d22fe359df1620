//! Coefficient maps and the terms that feed them.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::number::format_number;

/// Exponent of `X` in a term.
///
/// The grammar only produces non-negative exponents; the signed type keeps the
/// strict-mode negative exponent guard expressible.
pub type Exponent = i64;

/// Byte range and column of a piece of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// 0-based byte offset of the first character
    pub start: usize,
    /// 0-based byte offset one past the last character
    pub end: usize,
    /// 1-based column of the first character
    pub column: usize,
}

/// A single signed monomial `c * X^e` as read from the source.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    pub coefficient: f64,
    pub exponent: Exponent,
    pub span: Span,
}

impl Term {
    pub fn new(coefficient: f64, exponent: Exponent, span: Span) -> Self {
        Self {
            coefficient,
            exponent,
            span,
        }
    }
}

/// Mapping from exponent to accumulated coefficient, ordered by exponent.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polynomial {
    coefficients: BTreeMap<Exponent, f64>,
}

impl Polynomial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `coefficient` to whatever is already stored for `exponent`.
    pub fn accumulate(&mut self, exponent: Exponent, coefficient: f64) {
        *self.coefficients.entry(exponent).or_insert(0.0) += coefficient;
    }

    /// Adds a parsed term, summing with any term of the same exponent.
    pub fn add_term(&mut self, term: &Term) {
        self.accumulate(term.exponent, term.coefficient);
    }

    /// Stores `coefficient` for `exponent`, replacing any previous value.
    pub fn insert(&mut self, exponent: Exponent, coefficient: f64) -> Option<f64> {
        self.coefficients.insert(exponent, coefficient)
    }

    pub fn get(&self, exponent: Exponent) -> Option<f64> {
        self.coefficients.get(&exponent).copied()
    }

    /// Coefficient of `exponent`, or 0 when the exponent is absent.
    pub fn coefficient(&self, exponent: Exponent) -> f64 {
        self.get(exponent).unwrap_or(0.0)
    }

    pub fn contains_exponent(&self, exponent: Exponent) -> bool {
        self.coefficients.contains_key(&exponent)
    }

    /// Exponents in ascending order.
    pub fn exponents(&self) -> impl Iterator<Item = Exponent> + '_ {
        self.coefficients.keys().copied()
    }

    pub fn max_exponent(&self) -> Option<Exponent> {
        self.coefficients.keys().next_back().copied()
    }

    /// `(exponent, coefficient)` pairs in ascending exponent order.
    pub fn iter(&self) -> impl Iterator<Item = (Exponent, f64)> + '_ {
        self.coefficients.iter().map(|(e, c)| (*e, *c))
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(Exponent, f64) -> bool,
    {
        self.coefficients.retain(|e, c| keep(*e, *c));
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.add_term(&term);
        }
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut polynomial = Polynomial::new();
        polynomial.extend(iter);
        polynomial
    }
}

impl FromIterator<(Exponent, f64)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (Exponent, f64)>>(iter: I) -> Self {
        let mut polynomial = Polynomial::new();
        for (exponent, coefficient) in iter {
            polynomial.accumulate(exponent, coefficient);
        }
        polynomial
    }
}

impl<const N: usize> From<[(Exponent, f64); N]> for Polynomial {
    fn from(pairs: [(Exponent, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<BTreeMap<Exponent, f64>> for Polynomial {
    fn from(coefficients: BTreeMap<Exponent, f64>) -> Self {
        Self { coefficients }
    }
}

impl From<Polynomial> for BTreeMap<Exponent, f64> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = (&'a Exponent, &'a f64);
    type IntoIter = btree_map::Iter<'a, Exponent, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.iter()
    }
}

/// Renders `4.0 * X^0 + 4.0 * X^1 - 9.3 * X^2`; an empty polynomial renders `0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }
        for (i, (exponent, coefficient)) in self.iter().enumerate() {
            if i == 0 {
                write!(f, "{} * X^{exponent}", format_number(coefficient))?;
            } else if coefficient >= 0.0 {
                write!(f, " + {} * X^{exponent}", format_number(coefficient))?;
            } else {
                write!(f, " - {} * X^{exponent}", format_number(-coefficient))?;
            }
        }
        Ok(())
    }
}

/// Both sides of a parsed equation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    pub left: Polynomial,
    pub right: Polynomial,
}

impl Equation {
    pub fn new(left: Polynomial, right: Polynomial) -> Self {
        Self { left, right }
    }

    /// Sorted, de-duplicated exponents present on either side.
    pub fn exponents(&self) -> Vec<Exponent> {
        let mut all: Vec<Exponent> = self.left.exponents().chain(self.right.exponents()).collect();
        all.sort_unstable();
        all.dedup();
        all
    }
}
