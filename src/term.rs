//! Polynomial term representation
//!
//! A polynomial is a plain `Vec<Term>` / `&[Term]`; no wrapper type is needed
//! because every stage of the pipeline only walks the terms in order.

use std::fmt;

/// A single monomial: `coeff * x^exp`
/// e.g., -3x^2 = Term { coeff: -3, exp: 2 }
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    /// Signed integer coefficient
    pub coeff: i64,
    /// Non-negative integer exponent
    pub exp: u32,
}

impl Term {
    /// Create a new term
    pub fn new(coeff: i64, exp: u32) -> Self {
        Term { coeff, exp }
    }

    /// Create a constant term (exponent 0)
    pub fn constant(coeff: i64) -> Self {
        Term { coeff, exp: 0 }
    }

    /// Check if this term is a constant
    pub fn is_constant(&self) -> bool {
        self.exp == 0
    }

    /// Check if the coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.coeff == 0
    }
}

impl From<(i64, u32)> for Term {
    fn from((coeff, exp): (i64, u32)) -> Self {
        Term { coeff, exp }
    }
}

impl From<Term> for (i64, u32) {
    fn from(term: Term) -> Self {
        (term.coeff, term.exp)
    }
}

/// Build a term list from `(coefficient, exponent)` pairs
pub fn terms(pairs: &[(i64, u32)]) -> Vec<Term> {
    pairs.iter().copied().map(Term::from).collect()
}

/// Highest exponent in the polynomial, `None` when there are no terms
pub fn degree(poly: &[Term]) -> Option<u32> {
    poly.iter().map(|t| t.exp).max()
}

/// Renders the monomial in the default variable without delimiters,
/// e.g. `-3x^2`, `5x`, `7`
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::display::write_monomial(f, self.coeff, self.exp, crate::DEFAULT_VARIABLE)
    }
}
