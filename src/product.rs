//! Polynomial multiplication with like-term collection

use crate::{ParseError, Term};
use rustc_hash::FxHashMap;

/// Multiply two polynomials
///
/// Every pair of terms contributes `(c1 * c2, e1 + e2)`; coefficients that
/// land on the same exponent are summed. The result holds each exponent once,
/// sorted from highest to lowest.
///
/// Like terms that cancel are kept as zero-coefficient terms. Callers that
/// want them gone filter afterwards (see `ProductDiff::drop_zero_terms`).
///
/// Coefficients are summed in `i128`, so partial sums may leave the `i64`
/// range as long as the collected coefficient fits again.
///
/// # Example
/// ```ignore
/// // (x + 1)(x - 1) = x^2 + 0x - 1
/// let p = multiply(&terms(&[(1, 1), (1, 0)]), &terms(&[(1, 1), (-1, 0)]))?;
/// assert_eq!(p, terms(&[(1, 2), (0, 1), (-1, 0)]));
/// ```
///
/// # Errors
/// `ParseError::Overflow` if an exponent sum exceeds `u32` or a collected
/// coefficient does not fit in `i64`.
pub fn multiply(a: &[Term], b: &[Term]) -> Result<Vec<Term>, ParseError> {
    let overflow = || ParseError::overflow("product");
    let mut by_exp: FxHashMap<u32, i128> = FxHashMap::default();
    by_exp.reserve(a.len() * b.len());

    for lhs in a {
        for rhs in b {
            let exp = lhs.exp.checked_add(rhs.exp).ok_or_else(overflow)?;
            // i64 * i64 always fits in i128
            let coeff = i128::from(lhs.coeff) * i128::from(rhs.coeff);
            let sum = by_exp.entry(exp).or_insert(0);
            *sum = sum.checked_add(coeff).ok_or_else(overflow)?;
        }
    }

    let mut product = by_exp
        .into_iter()
        .map(|(exp, coeff)| {
            i64::try_from(coeff)
                .map(|coeff| Term::new(coeff, exp))
                .map_err(|_| overflow())
        })
        .collect::<Result<Vec<Term>, ParseError>>()?;
    product.sort_unstable_by(|x, y| y.exp.cmp(&x.exp));
    Ok(product)
}
