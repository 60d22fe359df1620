use logos::Logos;

/// Raw token type produced by the logos state machine.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum LogosToken {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equal,

    /// The only unknown the grammar knows about
    #[token("X")]
    Variable,

    /// Unsigned decimal: digits, then an optional point with optional digits.
    /// Signs are separate tokens so `-5` lexes as Minus, Number(5.0).
    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    /// Whitespace (skipped)
    #[regex(r"[ \t\n\r]+", logos::skip)]
    Whitespace,
}
