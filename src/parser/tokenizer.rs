//! Polynomial tokenizer: LaTeX text → ordered `Term`s
//!
//! Pipeline: strip whitespace -> split at signs -> parse each signed term
//!
//! Whitespace is removed up front, but every compact byte remembers its
//! offset in the caller's text so error spans point at what the user typed.

use crate::error::Span;
use crate::{ParseError, Term};
use std::ops::Range;
use std::str::FromStr;

/// Characters that may never appear in a variable symbol
const RESERVED: &[char] = &['+', '-', '^', '{', '}'];

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Input with whitespace removed, plus a map back to original byte offsets
struct CompactText {
    text: String,
    /// `origin[i]` is the original offset of compact byte `i`;
    /// the final entry is the original length
    origin: Vec<usize>,
}

impl CompactText {
    fn new(input: &str) -> Self {
        let mut text = String::with_capacity(input.len());
        let mut origin = Vec::with_capacity(input.len() + 1);
        for (pos, c) in input.char_indices() {
            if c.is_whitespace() {
                continue;
            }
            text.push(c);
            origin.extend(pos..pos + c.len_utf8());
        }
        origin.push(input.len());
        CompactText { text, origin }
    }

    fn slice(&self, range: Range<usize>) -> &str {
        &self.text[range]
    }

    /// Original-text span of a compact range.
    /// An empty range points at the character just before it.
    fn span(&self, range: Range<usize>) -> Span {
        if range.is_empty() {
            Span::at(self.origin[range.start.saturating_sub(1)])
        } else {
            Span::new(self.origin[range.start], self.origin[range.end - 1] + 1)
        }
    }
}

/// One sign-delimited chunk of the compact text
struct RawTerm {
    sign: i64,
    /// Term text after the sign
    body: Range<usize>,
}

impl RawTerm {
    fn new(text: &str, range: Range<usize>) -> Self {
        match text[range.clone()].chars().next() {
            Some('-') => RawTerm {
                sign: -1,
                body: range.start + 1..range.end,
            },
            Some('+') => RawTerm {
                sign: 1,
                body: range.start + 1..range.end,
            },
            // Only the first term may lack a sign
            _ => RawTerm { sign: 1, body: range },
        }
    }
}

/// Split into maximal chunks that start at a sign and run to the next one
fn split_terms(text: &str) -> Vec<RawTerm> {
    let mut raw = Vec::new();
    let mut start = 0;
    for (pos, c) in text.char_indices() {
        if pos > start && is_sign(c) {
            raw.push(RawTerm::new(text, start..pos));
            start = pos;
        }
    }
    raw.push(RawTerm::new(text, start..text.len()));
    raw
}

/// Parse a base-10 unsigned literal into `T`
fn parse_integer<T: FromStr>(text: &CompactText, range: Range<usize>) -> Result<T, ParseError> {
    let literal = text.slice(range.clone());
    let invalid = || ParseError::invalid_number_at(literal, text.span(range.clone()));

    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    literal.parse::<T>().map_err(|_| invalid())
}

/// Exponent from whatever follows the variable: nothing, `^n` or `^{n}`
fn parse_exponent(text: &CompactText, range: Range<usize>) -> Result<u32, ParseError> {
    let rest = text.slice(range.clone());
    if rest.is_empty() {
        return Ok(1);
    }
    let Some(exp_text) = rest.strip_prefix('^') else {
        return Err(ParseError::unexpected_text_at(rest, text.span(range)));
    };

    let digits = range.start + 1..range.end;
    if exp_text.starts_with('{') && exp_text.ends_with('}') && exp_text.len() >= 2 {
        parse_integer(text, digits.start + 1..digits.end - 1)
    } else {
        parse_integer(text, digits)
    }
}

fn parse_term(text: &CompactText, raw: &RawTerm, variable: &str) -> Result<Term, ParseError> {
    let body = text.slice(raw.body.clone());
    if body.is_empty() {
        return Err(ParseError::empty_term_at(text.span(raw.body.clone())));
    }

    let (magnitude, exp) = match body.find(variable) {
        Some(at) => {
            let var_start = raw.body.start + at;
            let magnitude = if at == 0 {
                1
            } else {
                parse_integer::<i64>(text, raw.body.start..var_start)?
            };
            let exp = parse_exponent(text, var_start + variable.len()..raw.body.end)?;
            (magnitude, exp)
        }
        None => (parse_integer::<i64>(text, raw.body.clone())?, 0),
    };

    Ok(Term::new(raw.sign * magnitude, exp))
}

/// Reject variable symbols the term grammar cannot tell apart from syntax
pub(crate) fn validate_variable(variable: &str) -> Result<(), ParseError> {
    let clashes = variable
        .chars()
        .any(|c| c.is_whitespace() || c.is_ascii_digit() || RESERVED.contains(&c));
    if variable.is_empty() || clashes {
        return Err(ParseError::InvalidVariable {
            variable: variable.to_string(),
        });
    }
    Ok(())
}

/// Convert one polynomial's LaTeX text into its `(coefficient, exponent)` terms
///
/// Terms keep their input order and like terms are not combined.
/// A missing coefficient before the variable means 1, a missing `^` means
/// exponent 1, and a term without the variable is a constant.
///
/// # Example
/// ```ignore
/// let terms = tokenize("2x^2 + 3x - 1", "x")?;
/// // [(2, 2), (3, 1), (-1, 0)]
/// ```
///
/// # Errors
/// Returns `ParseError` if:
/// - The text is empty or only whitespace
/// - A sign is not followed by a term
/// - A coefficient or exponent is not an integer literal
/// - Something other than `^` follows the variable
/// - `variable` is empty or contains whitespace, digits, signs, `^` or braces
pub fn tokenize(poly: &str, variable: &str) -> Result<Vec<Term>, ParseError> {
    validate_variable(variable)?;

    let text = CompactText::new(poly);
    if text.text.is_empty() {
        return Err(ParseError::EmptyPolynomial);
    }

    split_terms(&text.text)
        .iter()
        .map(|raw| parse_term(&text, raw, variable))
        .collect()
}
