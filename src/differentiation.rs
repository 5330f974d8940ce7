//! Differentiation - power rule applied term by term

use crate::{ParseError, Term};

/// Differentiate a polynomial with respect to its variable
///
/// `c*x^e` becomes `c*e*x^(e-1)`. Constants vanish from the output instead of
/// being emitted as zero terms. Term order is preserved.
///
/// # Errors
/// `ParseError::Overflow` if some `c*e` does not fit in `i64`.
pub fn differentiate(poly: &[Term]) -> Result<Vec<Term>, ParseError> {
    poly.iter()
        .filter(|term| !term.is_constant())
        .map(|term| {
            term.coeff
                .checked_mul(i64::from(term.exp))
                .map(|coeff| Term::new(coeff, term.exp - 1))
                .ok_or_else(|| ParseError::overflow("derivative"))
        })
        .collect()
}
