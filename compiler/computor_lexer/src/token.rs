use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents a token's location in the source text.
///
/// Equations are single-line, so only the column (1-based) and the byte
/// offset (0-based) are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based column number in the source text
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Location {
    /// Builds the location of a token starting at `offset`.
    pub fn at_offset(offset: usize) -> Self {
        Self {
            column: offset + 1,
            offset,
        }
    }
}

/// Represents the type of a token in a polynomial equation.
#[derive(Debug, Clone)]
pub enum TokenType {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `^`
    Caret,
    /// `=`
    Equal,

    /// The unknown `X`
    Variable,

    /// An unsigned decimal literal, e.g. `9.3`, `5.` or `42`
    Number(f64),

    /// Input the lexer could not recognise
    Error(String),
}

impl TokenType {
    /// Returns true for `+` and `-`.
    pub fn is_sign(&self) -> bool {
        matches!(self, TokenType::Plus | TokenType::Minus)
    }
}

impl PartialEq for TokenType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TokenType::Plus, TokenType::Plus) => true,
            (TokenType::Minus, TokenType::Minus) => true,
            (TokenType::Star, TokenType::Star) => true,
            (TokenType::Caret, TokenType::Caret) => true,
            (TokenType::Equal, TokenType::Equal) => true,
            (TokenType::Variable, TokenType::Variable) => true,

            // Literals compare by bit pattern so that `Eq` stays lawful
            (TokenType::Number(a), TokenType::Number(b)) => a.to_bits() == b.to_bits(),
            (TokenType::Error(a), TokenType::Error(b)) => a == b,

            _ => false,
        }
    }
}

impl Eq for TokenType {}

impl Hash for TokenType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            TokenType::Number(n) => n.to_bits().hash(state),
            TokenType::Error(s) => s.hash(state),
            _ => {}
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Plus => write!(f, "'+'"),
            TokenType::Minus => write!(f, "'-'"),
            TokenType::Star => write!(f, "'*'"),
            TokenType::Caret => write!(f, "'^'"),
            TokenType::Equal => write!(f, "'='"),
            TokenType::Variable => write!(f, "'X'"),
            TokenType::Number(n) => write!(f, "number {n}"),
            TokenType::Error(s) => write!(f, "invalid input {s:?}"),
        }
    }
}

/// Represents a token in the source text, including its type, lexeme, and location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token
    pub lexeme: String,
    /// The location of the token in the source text
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, location: Location) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Returns true if this token is an error token
    pub fn is_error(&self) -> bool {
        matches!(self.token_type, TokenType::Error(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.token_type, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.offset)
    }
}
