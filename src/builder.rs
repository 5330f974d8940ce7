//! Builder pattern API for the product-derivative pipeline
//!
//! Provides a fluent interface for configuring and running
//! extract -> tokenize -> multiply -> differentiate -> format.
//!
//! # Example
//! ```ignore
//! use latex_polydiff::{Delimiters, ProductDiff};
//!
//! let latex = ProductDiff::new()
//!     .variable("t")
//!     .delimiters(Delimiters::Inline)
//!     .derive_str("(t^2 + 1)(t - 3)")?;
//! assert_eq!(latex, "$3t^2 - 6t + 1$");
//! ```

use crate::display::format_latex_with;
use crate::parser::{factor_ranges, tokenize, validate_variable};
use crate::{DEFAULT_VARIABLE, Delimiters, ParseError, Term, degree, differentiate, multiply};
use tracing::{debug, debug_span, trace};

/// Every intermediate result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Derivation {
    /// Raw text of the first parenthesized factor
    pub first_factor: String,
    /// Raw text of the second parenthesized factor
    pub second_factor: String,
    pub first_terms: Vec<Term>,
    pub second_terms: Vec<Term>,
    /// Normalized product, highest exponent first
    pub product: Vec<Term>,
    pub derivative: Vec<Term>,
    /// Rendered derivative
    pub latex: String,
}

/// Builder for product differentiation
#[derive(Debug, Clone)]
pub struct ProductDiff {
    variable: String,
    drop_zero_terms: bool,
    delimiters: Delimiters,
}

impl Default for ProductDiff {
    fn default() -> Self {
        Self {
            variable: DEFAULT_VARIABLE.to_string(),
            drop_zero_terms: false,
            delimiters: Delimiters::Display,
        }
    }
}

impl ProductDiff {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the polynomial variable (default `x`)
    pub fn variable(mut self, var: impl Into<String>) -> Self {
        self.variable = var.into();
        self
    }

    /// Remove zero-coefficient terms left by multiplication (default: keep them)
    pub fn drop_zero_terms(mut self, drop: bool) -> Self {
        self.drop_zero_terms = drop;
        self
    }

    /// Set the math delimiters used for the result (default `$$`)
    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Get the configured variable
    pub fn get_variable(&self) -> &str {
        &self.variable
    }

    /// Run the full pipeline, keeping every stage
    ///
    /// Errors inside a factor are reported at their offset in `expr`.
    pub fn derive(&self, expr: &str) -> Result<Derivation, ParseError> {
        let _span = debug_span!("derive", expr).entered();

        validate_variable(&self.variable)?;

        let [first, second] = factor_ranges(expr)?;
        let first_factor = &expr[first.clone()];
        let second_factor = &expr[second.clone()];
        debug!(first_factor, second_factor, "extracted factors");

        let first_terms =
            tokenize(first_factor, &self.variable).map_err(|e| e.offset_by(first.start))?;
        let second_terms =
            tokenize(second_factor, &self.variable).map_err(|e| e.offset_by(second.start))?;
        debug!(?first_terms, ?second_terms, "tokenized factors");

        let mut product = multiply(&first_terms, &second_terms)?;
        if self.drop_zero_terms {
            let before = product.len();
            product.retain(|t| !t.is_zero());
            trace!(dropped = before - product.len(), "filtered zero terms");
        }
        debug!(?product, degree = ?degree(&product), "multiplied");

        let derivative = differentiate(&product)?;
        let latex = format_latex_with(&derivative, &self.variable, self.delimiters);
        debug!(?derivative, latex = %latex, "differentiated");

        Ok(Derivation {
            first_factor: first_factor.to_string(),
            second_factor: second_factor.to_string(),
            first_terms,
            second_terms,
            product,
            derivative,
            latex,
        })
    }

    /// Parse, multiply, differentiate and return only the LaTeX result
    pub fn derive_str(&self, expr: &str) -> Result<String, ParseError> {
        self.derive(expr).map(|d| d.latex)
    }
}
