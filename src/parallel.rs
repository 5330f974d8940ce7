//! Parallel batch differentiation using Rayon
//!
//! Enable with the `parallel` feature:
//! ```toml
//! latex_polydiff = { version = "0.1", features = ["parallel"] }
//! ```

use crate::{ParseError, ProductDiff};
use rayon::prelude::*;
use tracing::debug;

/// Run the pipeline over many independent expressions in parallel.
///
/// Results come back in input order; one failing expression does not affect
/// the others.
///
/// # Example
/// ```ignore
/// use latex_polydiff::{ProductDiff, parallel::derive_batch};
///
/// let results = derive_batch(&ProductDiff::new(), &["(x)(x)", "(x+1)(x"]);
/// assert_eq!(results[0].as_deref(), Ok("$$2x$$"));
/// assert!(results[1].is_err());
/// ```
pub fn derive_batch(builder: &ProductDiff, exprs: &[&str]) -> Vec<Result<String, ParseError>> {
    debug!(count = exprs.len(), "deriving batch");
    exprs
        .par_iter()
        .map(|expr| builder.derive_str(expr))
        .collect()
}
