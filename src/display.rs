//! LaTeX rendering for term sequences

use crate::{DEFAULT_VARIABLE, Term};
use std::fmt;

/// Math delimiters wrapped around a rendered polynomial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Delimiters {
    /// `$$...$$`
    #[default]
    Display,
    /// `$...$`
    Inline,
    /// No delimiters
    None,
}

impl Delimiters {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiters::Display => "$$",
            Delimiters::Inline => "$",
            Delimiters::None => "",
        }
    }
}

/// Write `|coeff|` followed by the variable part: `7`, `7x`, `7x^3`
fn write_magnitude<W: fmt::Write>(out: &mut W, magnitude: u64, exp: u32, var: &str) -> fmt::Result {
    match exp {
        0 => write!(out, "{}", magnitude),
        1 => write!(out, "{}{}", magnitude, var),
        _ => write!(out, "{}{}^{}", magnitude, var, exp),
    }
}

/// Write a single signed monomial, e.g. `-3x^2`
pub(crate) fn write_monomial<W: fmt::Write>(out: &mut W, coeff: i64, exp: u32, var: &str) -> fmt::Result {
    if coeff < 0 {
        out.write_char('-')?;
    }
    write_magnitude(out, coeff.unsigned_abs(), exp, var)
}

/// Displayable LaTeX form of a term sequence, rendered in the given order
#[derive(Debug, Clone, Copy)]
pub struct Latex<'a> {
    terms: &'a [Term],
    variable: &'a str,
    delimiters: Delimiters,
}

impl<'a> Latex<'a> {
    pub fn new(terms: &'a [Term], variable: &'a str, delimiters: Delimiters) -> Self {
        Latex {
            terms,
            variable,
            delimiters,
        }
    }
}

impl fmt::Display for Latex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.terms.split_first() else {
            // An empty polynomial is a bare zero, never delimited
            return write!(f, "0");
        };

        let delim = self.delimiters.as_str();
        write!(f, "{}", delim)?;
        write_monomial(f, first.coeff, first.exp, self.variable)?;
        for term in rest {
            // Only a positive coefficient is joined with " + "; zero gets " - "
            let op = if term.coeff > 0 { " + " } else { " - " };
            write!(f, "{}", op)?;
            write_magnitude(f, term.coeff.unsigned_abs(), term.exp, self.variable)?;
        }
        write!(f, "{}", delim)
    }
}

/// Render terms as display-math LaTeX in `x`
///
/// # Example
/// ```ignore
/// let s = format_latex(&terms(&[(6, 2), (-10, 1), (-11, 0)]));
/// assert_eq!(s, "$$6x^2 - 10x - 11$$");
/// ```
pub fn format_latex(poly: &[Term]) -> String {
    format_latex_with(poly, DEFAULT_VARIABLE, Delimiters::Display)
}

/// Render terms with a chosen variable symbol and delimiter style
pub fn format_latex_with(poly: &[Term], variable: &str, delimiters: Delimiters) -> String {
    Latex::new(poly, variable, delimiters).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms;

    #[test]
    fn test_format_derivative() {
        assert_eq!(
            format_latex(&terms(&[(6, 2), (-10, 1), (-11, 0)])),
            "$$6x^2 - 10x - 11$$"
        );
    }

    #[test]
    fn test_leading_negative() {
        assert_eq!(format_latex(&terms(&[(-1, 3), (2, 0)])), "$$-1x^3 + 2$$");
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(format_latex(&[]), "0");
        assert_eq!(format_latex_with(&[], "t", Delimiters::Inline), "0");
    }

    #[test]
    fn test_given_order_is_kept() {
        assert_eq!(format_latex(&terms(&[(4, 0), (1, 1)])), "$$4 + 1x$$");
    }

    #[test]
    fn test_zero_coefficient_rendered_with_minus() {
        assert_eq!(format_latex(&terms(&[(2, 1), (0, 0)])), "$$2x - 0$$");
        assert_eq!(format_latex(&terms(&[(0, 2), (0, 1), (3, 0)])), "$$0x^2 - 0x + 3$$");
    }

    #[test]
    fn test_variable_and_delimiters() {
        let p = terms(&[(3, 2), (-1, 1)]);
        assert_eq!(format_latex_with(&p, "t", Delimiters::Inline), "$3t^2 - 1t$");
        assert_eq!(format_latex_with(&p, "x", Delimiters::None), "3x^2 - 1x");
    }

    #[test]
    fn test_extreme_coefficient() {
        assert_eq!(
            format_latex_with(&terms(&[(i64::MIN, 0)]), "x", Delimiters::None),
            "-9223372036854775808"
        );
    }
}
