//! Whole-equation parsing: validation, side splitting, strict checks and the
//! read-only exponent queries built on top of them.

use computor_ast::{Equation, Exponent, Polynomial};
use log::debug;

use super::extract_polynomial;
use crate::error::ParseError;

/// Characters an equation may contain once whitespace is removed.
fn is_equation_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '.' | '^' | 'X' | '=')
}

/// Configuration for the equation parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Reject equations with no terms at all or with negative exponents
    pub strict: bool,
}

impl ParserConfig {
    /// Configuration with strict checks enabled.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Parser for `<terms> = <terms>` equations.
///
/// Holds no state between calls: every query re-parses its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquationParser {
    config: ParserConfig,
}

impl EquationParser {
    /// Create a parser with default (lenient) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// Parses both sides of `equation` into coefficient maps.
    ///
    /// # Examples
    ///
    /// ```
    /// use computor_ast::Polynomial;
    /// use computor_parser::EquationParser;
    ///
    /// let eq = EquationParser::new()
    ///     .parse("5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0")
    ///     .unwrap();
    /// assert_eq!(eq.left, Polynomial::from([(0, 5.0), (1, 4.0), (2, -9.3)]));
    /// assert_eq!(eq.right, Polynomial::from([(0, 1.0)]));
    /// ```
    pub fn parse(&self, equation: &str) -> Result<Equation, ParseError> {
        let equation = normalize(equation);
        validate_equation(&equation)?;
        let (left_side, right_side) = split_equation(&equation)?;
        debug!("parsing '{left_side}' = '{right_side}' (strict: {})", self.config.strict);

        let left = extract_polynomial(left_side)?;
        // Right-side columns are reported relative to the whole equation
        let right = extract_polynomial(right_side)
            .map_err(|e| e.shift_column(left_side.len() + 1))?;

        if self.config.strict {
            validate_terms(&left, &right)?;
        }

        Ok(Equation::new(left, right))
    }

    /// Highest exponent written on either side, 0 if there is none.
    pub fn max_degree(&self, equation: &str) -> Result<Exponent, ParseError> {
        let eq = self.parse(equation)?;
        Ok(eq.exponents().last().copied().unwrap_or(0))
    }

    /// Sorted, de-duplicated exponents written on either side.
    pub fn all_degrees(&self, equation: &str) -> Result<Vec<Exponent>, ParseError> {
        Ok(self.parse(equation)?.exponents())
    }

    /// Whether either side has a term with exponent `degree`.
    pub fn has_term(&self, equation: &str, degree: Exponent) -> Result<bool, ParseError> {
        let eq = self.parse(equation)?;
        Ok(eq.left.contains_exponent(degree) || eq.right.contains_exponent(degree))
    }
}

/// Removes all whitespace.
pub fn normalize(equation: &str) -> String {
    equation.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Structural checks, in order: `=` present, `=` unique, allowed
/// characters only, both sides non-empty.
pub fn validate_equation(equation: &str) -> Result<(), ParseError> {
    match equation.matches('=').count() {
        0 => return Err(ParseError::MissingEquals),
        1 => {}
        _ => return Err(ParseError::MultipleEquals),
    }

    if let Some(c) = equation.chars().find(|c| !is_equation_char(*c)) {
        return Err(ParseError::InvalidCharacter(c));
    }

    let (left, right) = split_equation(equation)?;
    if left.is_empty() || right.is_empty() {
        return Err(ParseError::EmptySide);
    }
    Ok(())
}

fn split_equation(equation: &str) -> Result<(&str, &str), ParseError> {
    equation.split_once('=').ok_or(ParseError::MissingEquals)
}

fn validate_terms(left: &Polynomial, right: &Polynomial) -> Result<(), ParseError> {
    if left.is_empty() && right.is_empty() {
        return Err(ParseError::NoTerms);
    }

    // Unreachable through the grammar, which only reads unsigned exponents
    if let Some(exponent) = left.exponents().chain(right.exponents()).find(|e| *e < 0) {
        return Err(ParseError::NegativeExponent(exponent));
    }
    Ok(())
}
