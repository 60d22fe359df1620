use computor_ast::Exponent;
use thiserror::Error;

/// Every way an equation string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid equation: missing '=' sign")]
    MissingEquals,

    #[error("Invalid equation: multiple '=' signs found")]
    MultipleEquals,

    #[error("Invalid equation: contains invalid characters ('{0}')")]
    InvalidCharacter(char),

    #[error("Invalid equation: empty side detected")]
    EmptySide,

    #[error("Invalid expression: empty expression")]
    EmptyExpression,

    #[error("No valid terms found in expression '{0}'")]
    NoValidTerms(String),

    /// The expression has terms, but does not consist of terms only.
    #[error("Invalid term format in '{expression}': unexpected {found} at column {column}")]
    InvalidTermFormat {
        expression: String,
        /// 1-based column of the offending token
        column: usize,
        found: String,
    },

    #[error("Negative exponents not supported (found X^{0})")]
    NegativeExponent(Exponent),

    #[error("No valid terms found in equation")]
    NoTerms,
}

impl ParseError {
    /// Column the error points at, when it points at one.
    pub fn column(&self) -> Option<usize> {
        match self {
            ParseError::InvalidTermFormat { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// Moves a column-carrying error right by `offset` columns.
    ///
    /// Used to report right-hand side errors relative to the whole equation.
    pub fn shift_column(self, offset: usize) -> Self {
        match self {
            ParseError::InvalidTermFormat {
                expression,
                column,
                found,
            } => ParseError::InvalidTermFormat {
                expression,
                column: column + offset,
                found,
            },
            other => other,
        }
    }
}
