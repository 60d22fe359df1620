//! Equation lexical analyzer
//!
//! This crate turns one side of a polynomial equation (or a whole equation)
//! into a stream of tokens for the term parser.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{tokenize, Lexer};
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};
