//! Product Derivative Library
//!
//! Differentiates a product of two single-variable polynomials written in
//! LaTeX and renders the derivative back to LaTeX.
//!
//! # Pipeline
//! - `extract_factors`: `(p1)(p2)` → `p1`, `p2`
//! - `tokenize`: polynomial text → `(coefficient, exponent)` terms
//! - `multiply`: product with like terms collected
//! - `differentiate`: power rule, constants dropped
//! - `format_latex`: terms → `$$...$$`
//!
//! # Usage Examples
//!
//! ## One call
//! ```ignore
//! use latex_polydiff::derive_product;
//! let result = derive_product("(2x^2+3x+1)(x-4)").unwrap();
//! assert_eq!(result, "$$6x^2 - 10x - 11$$");
//! ```
//!
//! ## Stage by stage
//! ```ignore
//! use latex_polydiff::*;
//! let (p, q) = extract_factors("(2x^2+3x+1)(x-4)")?;
//! let product = multiply(&tokenize(p, "x")?, &tokenize(q, "x")?)?;
//! let latex = format_latex(&differentiate(&product)?);
//! ```
//!
//! ## Builder
//! ```ignore
//! use latex_polydiff::{Delimiters, ProductDiff};
//! let d = ProductDiff::new().variable("t").drop_zero_terms(true).derive("(t+1)(t-1)")?;
//! println!("{:?} -> {}", d.product, d.latex);
//! ```

mod builder;
mod differentiation;
mod display;
mod error;
mod parser;
mod product;
mod term;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use builder::{Derivation, ProductDiff};
pub use differentiation::differentiate;
pub use display::{Delimiters, Latex, format_latex, format_latex_with};
pub use error::{ParseError, Span};
pub use parser::{extract_factors, tokenize};
pub use product::multiply;
pub use term::{Term, degree, terms};

/// Variable symbol used when none is configured
pub const DEFAULT_VARIABLE: &str = "x";

/// Main API function: differentiate the product written in `expr`
///
/// # Arguments
/// * `expr` - Two parenthesized polynomials in `x`, e.g. `"(2x^2 + 3x + 1)(x - 4)"`
///
/// # Returns
/// The derivative as `$$...$$` LaTeX (or `"0"`), or a `ParseError` if the
/// input is malformed or a result coefficient overflows
///
/// # Note
/// For another variable or delimiter style, use the `ProductDiff` builder:
/// ```ignore
/// ProductDiff::new().variable("t").derive_str("(t^2)(t)")
/// ```
pub fn derive_product(expr: &str) -> Result<String, ParseError> {
    ProductDiff::new().derive_str(expr)
}
