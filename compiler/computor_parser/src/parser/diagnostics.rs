use crate::error::ParseError;

/// A user-facing description of a rejected equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    /// 1-based column in the whitespace-free equation, when known
    pub column: Option<usize>,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic with no position
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            column: None,
            help: None,
        }
    }

    /// Anchor the diagnostic at a column
    pub fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        let diag = Diagnostic {
            message: err.to_string(),
            column: err.column(),
            help: None,
        };
        match help_for_error(err) {
            Some(help) => diag.with_help(help),
            None => diag,
        }
    }
}

fn help_for_error(err: &ParseError) -> Option<&'static str> {
    use ParseError::*;
    match err {
        MissingEquals => Some("An equation looks like '5 * X^0 + 4 * X^1 = 4 * X^0'"),
        MultipleEquals => Some("Only one '=' may separate the two sides"),
        InvalidCharacter(_) => {
            Some("Only digits, '.', '+', '-', '*', '^' and an upper-case 'X' are allowed")
        }
        EmptySide => Some("Write '0' for a side with nothing on it"),
        InvalidTermFormat { .. } => {
            Some("Every term is written 'a * X^p', with terms separated by '+' or '-'")
        }
        NoValidTerms(_) | NoTerms => Some("Terms are written 'a * X^p', e.g. '3.5 * X^2'"),
        NegativeExponent(_) => Some("Exponents must be non-negative integers"),
        EmptyExpression => None,
    }
}

/// Render a diagnostic with the source line and a caret under the column.
///
/// `source` should be the equation the column refers to (whitespace removed).
pub fn render_snippet(diag: &Diagnostic, source: &str) -> String {
    let mut out = format!("error: {}\n", diag.message);

    if let Some(column) = diag.column {
        out.push_str(&format!(" --> col {column}\n"));
        out.push_str(&format!("  | {source}\n"));
        // Columns past the end point just after the last character
        let pad = column.saturating_sub(1).min(source.chars().count());
        out.push_str(&format!("  | {}^\n", " ".repeat(pad)));
    }

    if let Some(help) = &diag.help {
        out.push_str(&format!("  = help: {help}\n"));
    }
    out
}
