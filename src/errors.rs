// Error types for constraint evaluation

use thiserror::Error;

/// A constraint whose pattern the regex engine rejected.
///
/// Pattern generation itself is total, and the closed catalog cannot
/// produce a malformed quantifier from a `usize` threshold, so this is
/// a programming-error channel: it exists so a bad pattern surfaces
/// loudly instead of being treated as "no match".
#[derive(Error, Debug)]
pub enum ConstraintError {
    #[error("Invalid constraint pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Evaluating pattern '{pattern}' failed: {source}")]
    Evaluation {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

pub type Result<T> = std::result::Result<T, ConstraintError>;
