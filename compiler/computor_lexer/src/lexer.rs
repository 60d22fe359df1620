//! Lexer for polynomial equations using the 'logos' crate
//! Recognizes signs, the `*X^` marker pieces, `=`, and unsigned decimals

use crate::logos_token::LogosToken;
use crate::token::{Location, Token, TokenType};
use logos::Logos;

#[cfg(feature = "logging")]
use log::trace;

/// Equation lexer
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, LogosToken>,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: LogosToken::lexer(source),
        }
    }

    /// Convert a LogosToken to our semantic Token type
    fn convert_token(logos_token: LogosToken, lexeme: &str, location: Location) -> Token {
        let token_type = match logos_token {
            LogosToken::Plus => TokenType::Plus,
            LogosToken::Minus => TokenType::Minus,
            LogosToken::Star => TokenType::Star,
            LogosToken::Caret => TokenType::Caret,
            LogosToken::Equal => TokenType::Equal,
            LogosToken::Variable => TokenType::Variable,
            LogosToken::Number(n) => TokenType::Number(n),
            // Skipped by logos, never yielded
            LogosToken::Whitespace => {
                TokenType::Error(format!("Unexpected whitespace at column {}", location.column))
            }
        };

        Token::new(token_type, lexeme, location)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.logos_lexer.next()?;
        let lexeme = self.logos_lexer.slice();
        let location = Location::at_offset(self.logos_lexer.span().start);
        let token = match logos_token {
            Ok(token) => Self::convert_token(token, lexeme, location),
            Err(()) => Token::new(
                TokenType::Error(format!("Invalid token at column {}", location.column)),
                lexeme,
                location,
            ),
        };

        #[cfg(feature = "logging")]
        trace!("lexed {token}");

        Some(token)
    }
}

/// Tokenizes `source` completely.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
