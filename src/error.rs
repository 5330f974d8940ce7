//! Error types with source spans

use thiserror::Error;

/// Source location span for error reporting
/// Represents a range of bytes in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single position
    pub fn at(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Move the span `offset` bytes to the right
    pub fn shift(self, offset: usize) -> Self {
        Span {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Format the span for display (1-indexed for users)
    pub fn display(&self) -> String {
        if !self.is_valid() {
            String::new()
        } else if self.end - self.start == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.end)
        }
    }
}

fn location(span: &Option<Span>) -> String {
    span.map_or(String::new(), |s| s.display())
}

/// Every way an input can be rejected by the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `(` or `)` delimiter could not be found.
    /// `from` is the byte offset where the search started; `span` covers the
    /// searched text and is `None` when nothing was left to search.
    #[error("no '{delimiter}' found from byte offset {from}")]
    MissingDelimiter {
        delimiter: char,
        from: usize,
        span: Option<Span>,
    },

    #[error("polynomial is empty")]
    EmptyPolynomial,

    /// A sign with no term text after it, as in `x+` or `x--4`
    #[error("sign is not followed by a term{}", location(.span))]
    EmptyTerm { span: Option<Span> },

    #[error("invalid integer literal '{value}'{}", location(.span))]
    InvalidNumber { value: String, span: Option<Span> },

    /// Text after the variable that is not an exponent, as in `2xy`
    #[error("unexpected '{text}' after the variable{}", location(.span))]
    UnexpectedText { text: String, span: Option<Span> },

    #[error("'{variable}' cannot be used as the polynomial variable")]
    InvalidVariable { variable: String },

    /// A product or derivative coefficient left the `i64` range, or an
    /// exponent left the `u32` range
    #[error("integer overflow while computing the {stage}")]
    Overflow { stage: &'static str },
}

impl ParseError {
    /// A failed search for `delimiter` over `from..len`
    pub(crate) fn missing_delimiter(delimiter: char, from: usize, len: usize) -> Self {
        ParseError::MissingDelimiter {
            delimiter,
            from,
            span: (from < len).then(|| Span::new(from, len)),
        }
    }

    pub(crate) fn overflow(stage: &'static str) -> Self {
        ParseError::Overflow { stage }
    }

    pub(crate) fn empty_term_at(span: Span) -> Self {
        ParseError::EmptyTerm { span: Some(span) }
    }

    pub(crate) fn invalid_number_at(value: impl Into<String>, span: Span) -> Self {
        ParseError::InvalidNumber {
            value: value.into(),
            span: Some(span),
        }
    }

    pub(crate) fn unexpected_text_at(text: impl Into<String>, span: Span) -> Self {
        ParseError::UnexpectedText {
            text: text.into(),
            span: Some(span),
        }
    }

    /// Location of the offending text, when the error has one
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::EmptyTerm { span }
            | ParseError::InvalidNumber { span, .. }
            | ParseError::UnexpectedText { span, .. }
            | ParseError::MissingDelimiter { span, .. } => *span,
            ParseError::EmptyPolynomial
            | ParseError::InvalidVariable { .. }
            | ParseError::Overflow { .. } => None,
        }
    }

    /// Re-base the error location by `offset` bytes.
    ///
    /// Used when a factor was parsed on its own and the error should point
    /// into the whole expression instead.
    pub fn offset_by(self, offset: usize) -> Self {
        match self {
            ParseError::EmptyTerm { span } => ParseError::EmptyTerm {
                span: span.map(|s| s.shift(offset)),
            },
            ParseError::InvalidNumber { value, span } => ParseError::InvalidNumber {
                value,
                span: span.map(|s| s.shift(offset)),
            },
            ParseError::UnexpectedText { text, span } => ParseError::UnexpectedText {
                text,
                span: span.map(|s| s.shift(offset)),
            },
            ParseError::MissingDelimiter {
                delimiter,
                from,
                span,
            } => ParseError::MissingDelimiter {
                delimiter,
                from: from + offset,
                span: span.map(|s| s.shift(offset)),
            },
            other => other,
        }
    }
}
