// Term parser for one side of a polynomial equation, written with nom over
// the token slices produced by computor_lexer.
//
// Grammar:
//   side          := constant | leading_term signed_term*
//   constant      := sign? number
//   leading_term  := sign? number '*' 'X' '^' integer
//   signed_term   := sign  number '*' 'X' '^' integer

pub mod diagnostics;
pub mod equation;

pub use diagnostics::{render_snippet, Diagnostic};
pub use equation::{EquationParser, ParserConfig};

use computor_ast::{Exponent, Polynomial, Span, Term};
use computor_lexer::{tokenize, Token, TokenType};
use log::{debug, trace};
use nom::combinator::{opt, value};
use nom::error::{Error as NomError, ErrorKind};
use nom::multi::many0;
use nom::sequence::tuple;
use nom::{IResult, InputLength};
use std::num::IntErrorKind;

use crate::error::ParseError;

/// A borrowed run of tokens, used as nom input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSlice<'a>(pub &'a [Token]);

impl<'a> TokenSlice<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice(tokens)
    }

    pub fn first(&self) -> Option<&'a Token> {
        self.0.first()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl InputLength for TokenSlice<'_> {
    fn input_len(&self) -> usize {
        self.0.len()
    }
}

pub type ParseResult<'a, T> = IResult<TokenSlice<'a>, T>;

/// Consumes one token if `predicate` accepts its type, failing with `kind` otherwise.
pub fn take_token_if<'a, F>(
    predicate: F,
    kind: ErrorKind,
) -> impl Fn(TokenSlice<'a>) -> ParseResult<'a, &'a Token>
where
    F: Fn(&TokenType) -> bool,
{
    move |input: TokenSlice<'a>| match input.0.split_first() {
        Some((token, rest)) if predicate(&token.token_type) => Ok((TokenSlice(rest), token)),
        _ => Err(nom::Err::Error(NomError::new(input, kind))),
    }
}

fn parse_sign(input: TokenSlice<'_>) -> ParseResult<'_, &Token> {
    take_token_if(TokenType::is_sign, ErrorKind::Char)(input)
}

fn parse_number(input: TokenSlice<'_>) -> ParseResult<'_, (f64, &Token)> {
    if let Some((token, rest)) = input.0.split_first() {
        if let TokenType::Number(number) = token.token_type {
            return Ok((TokenSlice(rest), (number, token)));
        }
    }
    Err(nom::Err::Error(NomError::new(input, ErrorKind::Digit)))
}

/// The `*X^` marker between coefficient and exponent.
fn parse_marker(input: TokenSlice<'_>) -> ParseResult<'_, ()> {
    value(
        (),
        tuple((
            take_token_if(|t| matches!(t, TokenType::Star), ErrorKind::Tag),
            take_token_if(|t| matches!(t, TokenType::Variable), ErrorKind::Tag),
            take_token_if(|t| matches!(t, TokenType::Caret), ErrorKind::Tag),
        )),
    )(input)
}

/// A non-negative integer exponent; `2.5` or `2.` are rejected.
///
/// Exponents too large for [`Exponent`] saturate to `Exponent::MAX`, which is
/// still read as "degree above 2".
fn parse_exponent(input: TokenSlice<'_>) -> ParseResult<'_, (Exponent, &Token)> {
    let (rest, (_, token)) = parse_number(input)?;
    match token.lexeme.parse::<Exponent>() {
        Ok(exponent) => Ok((rest, (exponent, token))),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            debug!("exponent {} saturated to {}", token.lexeme, Exponent::MAX);
            Ok((rest, (Exponent::MAX, token)))
        }
        Err(_) => Err(nom::Err::Error(NomError::new(input, ErrorKind::MapRes))),
    }
}

fn signed(sign: Option<&Token>, magnitude: f64) -> f64 {
    match sign {
        Some(token) if token.token_type == TokenType::Minus => -magnitude,
        _ => magnitude,
    }
}

fn span_between(first: &Token, last: &Token) -> Span {
    Span {
        start: first.location.offset,
        end: last.location.offset + last.lexeme.len(),
        column: first.location.column,
    }
}

fn parse_term_after_sign<'a>(
    input: TokenSlice<'a>,
    sign: Option<&'a Token>,
) -> ParseResult<'a, Term> {
    let (input, ((coefficient, number), _, (exponent, last))) =
        tuple((parse_number, parse_marker, parse_exponent))(input)?;
    let first = sign.unwrap_or(number);
    let term = Term::new(signed(sign, coefficient), exponent, span_between(first, last));
    trace!("term {} * X^{} at column {}", term.coefficient, term.exponent, term.span.column);
    Ok((input, term))
}

/// First term of a side: the sign is optional.
pub fn parse_leading_term(input: TokenSlice<'_>) -> ParseResult<'_, Term> {
    let (input, sign) = opt(parse_sign)(input)?;
    parse_term_after_sign(input, sign)
}

/// Any later term: the sign is what separates it from the previous one.
pub fn parse_signed_term(input: TokenSlice<'_>) -> ParseResult<'_, Term> {
    let (input, sign) = parse_sign(input)?;
    parse_term_after_sign(input, Some(sign))
}

/// Parses as many terms as possible; the caller checks what is left over.
pub fn parse_terms(input: TokenSlice<'_>) -> ParseResult<'_, Vec<Term>> {
    let (input, first) = parse_leading_term(input)?;
    let (input, rest) = many0(parse_signed_term)(input)?;
    let mut terms = Vec::with_capacity(rest.len() + 1);
    terms.push(first);
    terms.extend(rest);
    Ok((input, terms))
}

/// A side that is a single number, e.g. the `0` in `... = 0`, read as `n * X^0`.
fn parse_constant_side(input: TokenSlice<'_>) -> Option<Term> {
    let (rest, (sign, (constant, number))) = tuple((opt(parse_sign), parse_number))(input).ok()?;
    if !rest.is_empty() {
        return None;
    }
    let first = sign.unwrap_or(number);
    Some(Term::new(signed(sign, constant), 0, span_between(first, number)))
}

fn term_format_error(expression: &str, at: TokenSlice<'_>) -> ParseError {
    match at.first() {
        Some(token) => ParseError::InvalidTermFormat {
            expression: expression.to_string(),
            column: token.location.column,
            found: format!("'{}'", token.lexeme),
        },
        None => ParseError::InvalidTermFormat {
            expression: expression.to_string(),
            column: expression.len() + 1,
            found: "end of expression".to_string(),
        },
    }
}

/// Where a nom error says parsing stopped.
fn error_input(err: nom::Err<NomError<TokenSlice<'_>>>) -> Option<TokenSlice<'_>> {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => Some(e.input),
        nom::Err::Incomplete(_) => None,
    }
}

/// A `number * X ^ number` run, whatever the exponent looks like.
fn parse_term_shape(input: TokenSlice<'_>) -> ParseResult<'_, ()> {
    value((), tuple((opt(parse_sign), parse_number, parse_marker, parse_number)))(input)
}

/// Whether something shaped like a term starts anywhere in `tokens`.
///
/// A malformed exponent (`X^2.5`) still counts, so that side is reported as a
/// bad term rather than as having no terms at all.
fn contains_term(tokens: &[Token]) -> bool {
    (0..tokens.len()).any(|i| parse_term_shape(TokenSlice(&tokens[i..])).is_ok())
}

/// Extracts the terms of one side, in source order.
///
/// The whole expression must be made of terms: anything left over fails the
/// parse rather than being skipped.
pub fn extract_terms(expression: &str) -> Result<Vec<Term>, ParseError> {
    if expression.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let tokens = tokenize(expression);
    let input = TokenSlice::new(&tokens);

    if let Some(term) = parse_constant_side(input) {
        debug!("'{expression}' is a bare constant");
        return Ok(vec![term]);
    }

    match parse_terms(input) {
        Ok((rest, terms)) if rest.is_empty() => {
            debug!("extracted {} term(s) from '{expression}'", terms.len());
            Ok(terms)
        }
        Ok((rest, _)) => {
            // Re-run the term parser on the leftover to find the exact token it chokes on
            let at = parse_signed_term(rest)
                .err()
                .and_then(error_input)
                .unwrap_or(rest);
            Err(term_format_error(expression, at))
        }
        Err(_) if !contains_term(&tokens) => {
            Err(ParseError::NoValidTerms(expression.to_string()))
        }
        Err(err) => {
            let at = error_input(err).unwrap_or(input);
            Err(term_format_error(expression, at))
        }
    }
}

/// Extracts one side into a coefficient map, summing same-exponent terms.
pub fn extract_polynomial(expression: &str) -> Result<Polynomial, ParseError> {
    Ok(extract_terms(expression)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn str_to_tokens(input: &str) -> Vec<Token> {
        tokenize(input)
    }

    #[test]
    fn test_leading_term_without_sign() {
        let tokens = str_to_tokens("5*X^0");
        let (rest, term) = parse_leading_term(TokenSlice::new(&tokens)).unwrap();
        assert!(rest.is_empty());
        assert_eq!(term.coefficient, 5.0);
        assert_eq!(term.exponent, 0);
        assert_eq!(term.span, Span { start: 0, end: 5, column: 1 });
    }

    #[test]
    fn test_leading_term_with_sign() {
        let tokens = str_to_tokens("-9.3*X^2");
        let (_, term) = parse_leading_term(TokenSlice::new(&tokens)).unwrap();
        assert_eq!(term.coefficient, -9.3);
        assert_eq!(term.exponent, 2);
    }

    #[test]
    fn test_signed_term_requires_sign() {
        let tokens = str_to_tokens("4*X^1");
        assert!(parse_signed_term(TokenSlice::new(&tokens)).is_err());
    }

    #[test]
    fn test_exponent_must_be_integer() {
        let tokens = str_to_tokens("4*X^2.5");
        assert!(parse_leading_term(TokenSlice::new(&tokens)).is_err());
        let tokens = str_to_tokens("4*X^2.");
        assert!(parse_leading_term(TokenSlice::new(&tokens)).is_err());
    }

    #[test]
    fn test_parse_terms_stops_at_garbage() {
        let tokens = str_to_tokens("1*X^0+2*X^1**");
        let (rest, terms) = parse_terms(TokenSlice::new(&tokens)).unwrap();
        assert_eq!(terms.len(), 2);
        assert_eq!(rest.0.len(), 2);
    }

    #[test]
    fn test_extract_accumulates() {
        let p = extract_polynomial("2*X^1+3*X^1").unwrap();
        assert_eq!(p, Polynomial::from([(1, 5.0)]));
    }

    #[test]
    fn test_extract_leading_plus() {
        let p = extract_polynomial("+5*X^0-3*X^1").unwrap();
        assert_eq!(p, Polynomial::from([(0, 5.0), (1, -3.0)]));
    }

    #[test]
    fn test_extract_constant_side() {
        assert_eq!(extract_polynomial("0").unwrap(), Polynomial::from([(0, 0.0)]));
        assert_eq!(extract_polynomial("-4.5").unwrap(), Polynomial::from([(0, -4.5)]));
    }

    #[test]
    fn test_extract_empty_expression() {
        assert_eq!(extract_terms(""), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn test_extract_no_valid_terms() {
        assert_eq!(
            extract_terms("X^2"),
            Err(ParseError::NoValidTerms("X^2".to_string()))
        );
        assert_eq!(
            extract_terms("+-"),
            Err(ParseError::NoValidTerms("+-".to_string()))
        );
    }

    #[test]
    fn test_extract_points_at_offending_token() {
        let err = extract_terms("1*X^0+2*X^^1").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidTermFormat {
                expression: "1*X^0+2*X^^1".to_string(),
                column: 11,
                found: "'^'".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_missing_sign_between_terms() {
        let err = extract_terms("1*X^02*X^1").unwrap_err();
        // `02` lexes as one number, so the leftover starts at the second '*'
        assert_eq!(err.column(), Some(7));
    }

    #[test]
    fn test_extract_trailing_sign() {
        let err = extract_terms("1*X^0+").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidTermFormat {
                expression: "1*X^0+".to_string(),
                column: 7,
                found: "end of expression".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_malformed_exponent_in_only_term() {
        assert_eq!(
            extract_terms("2*X^2.5"),
            Err(ParseError::InvalidTermFormat {
                expression: "2*X^2.5".to_string(),
                column: 5,
                found: "'2.5'".to_string(),
            })
        );
        assert_eq!(
            extract_terms("2*X^2."),
            Err(ParseError::InvalidTermFormat {
                expression: "2*X^2.".to_string(),
                column: 5,
                found: "'2.'".to_string(),
            })
        );
    }

    #[test]
    fn test_malformed_exponent_reported_the_same_in_any_position() {
        let first = extract_terms("2*X^2.5").unwrap_err();
        let later = extract_terms("1*X^0+2*X^2.5").unwrap_err();
        assert!(matches!(first, ParseError::InvalidTermFormat { .. }));
        assert!(matches!(later, ParseError::InvalidTermFormat { .. }));
        assert_eq!(later.column(), Some(11));
    }

    #[test]
    fn test_oversized_exponent_saturates() {
        let terms = extract_terms("1*X^99999999999999999999").unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].exponent, Exponent::MAX);
        assert_eq!(terms[0].coefficient, 1.0);
    }

    #[test]
    fn test_extract_malformed_first_term_with_later_term() {
        let err = extract_terms("*5*X^2").unwrap_err();
        assert_eq!(err.column(), Some(1));
    }
}
