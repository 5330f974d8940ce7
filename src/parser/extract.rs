//! Factor extraction: `(p1)(p2)` → `p1`, `p2`

use crate::ParseError;
use std::ops::Range;

/// Find `delimiter` at or after byte offset `from`
fn find_from(expr: &str, delimiter: char, from: usize) -> Result<usize, ParseError> {
    expr[from..]
        .find(delimiter)
        .map(|pos| from + pos)
        .ok_or_else(|| ParseError::missing_delimiter(delimiter, from, expr.len()))
}

/// Byte ranges of the two parenthesized groups' contents, delimiters excluded.
///
/// Each search starts where the previous one stopped, so nested parentheses
/// are not matched: the first group ends at the first `)` after its `(`.
pub(crate) fn factor_ranges(expr: &str) -> Result<[Range<usize>; 2], ParseError> {
    let first_open = find_from(expr, '(', 0)?;
    let first_close = find_from(expr, ')', first_open + 1)?;
    let second_open = find_from(expr, '(', first_close + 1)?;
    let second_close = find_from(expr, ')', second_open + 1)?;

    Ok([
        first_open + 1..first_close,
        second_open + 1..second_close,
    ])
}

/// Split a product written as `(polynomial 1)(polynomial 2)` into its two factors
///
/// Text before, between and after the two groups is ignored and whitespace
/// inside a group is kept as-is.
///
/// # Example
/// ```ignore
/// let (p, q) = extract_factors("(2x^2 + 3x + 1)(x - 4)")?;
/// assert_eq!((p, q), ("2x^2 + 3x + 1", "x - 4"));
/// ```
///
/// # Errors
/// `ParseError::MissingDelimiter` if any of the four parentheses is absent.
pub fn extract_factors(expr: &str) -> Result<(&str, &str), ParseError> {
    let [first, second] = factor_ranges(expr)?;
    Ok((&expr[first], &expr[second]))
}
