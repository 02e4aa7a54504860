// Constraint: a catalog rule paired with its user-facing error message

use crate::Rule;
use serde::{Deserialize, Serialize};

/// An immutable pairing of a [`Rule`] and the error message reported
/// when text fails it.
///
/// Constraints are plain values with no identity beyond their two
/// fields; callers build them per validation call and the evaluator
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    /// The rule to evaluate.
    pub rule: Rule,
    /// Message reported when the rule does not match.
    pub message: String,
}

impl Constraint {
    /// Create a new constraint.
    pub fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}
