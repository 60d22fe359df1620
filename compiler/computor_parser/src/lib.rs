//! Parser for polynomial equations of the form `a * X^p + ... = b * X^q + ...`.

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{
    extract_polynomial, extract_terms, render_snippet, Diagnostic, EquationParser, ParserConfig,
    TokenSlice,
};
pub use parser::equation::{normalize, validate_equation};
