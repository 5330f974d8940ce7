//! Parser module - LaTeX text to terms
//!
//! Two stages: `extract_factors` pulls the two polynomial groups out of a
//! `(p1)(p2)` product, then `tokenize` turns each group into `Term`s.
mod extract;
mod tokenizer;

pub use extract::extract_factors;
pub use tokenizer::tokenize;

pub(crate) use extract::factor_ranges;
pub(crate) use tokenizer::validate_variable;
