// Constraint evaluator and the ConstraintSet builder

use crate::{Constraint, ConstraintError, Result, Rule};
use fancy_regex::Regex;
use once_cell::sync::Lazy;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(&Rule::Url.pattern()).unwrap());

/// Rearrange `text` into descending code-point order.
///
/// Legacy evaluators matched every non-URL constraint against this
/// rearrangement instead of the literal text, which silently breaks
/// order- and anchor-sensitive rules (an email address stops looking
/// like one once its characters are sorted). [`validate_text`]
/// therefore matches the literal text; callers that need the legacy
/// behavior can still get it with
/// `validate_text(&probe(text), constraints)`.
pub fn probe(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    chars.sort_unstable_by(|a, b| b.cmp(a));
    chars.into_iter().collect()
}

/// Evaluate an ordered list of constraints against `text`.
///
/// Each constraint's rule pattern is searched against the text (a match
/// anywhere satisfies the constraint; anchored patterns constrain the
/// match position themselves). Returns `Ok(None)` when every constraint
/// is satisfied, otherwise `Ok(Some(messages))` with the messages of
/// the failing constraints in input order, without deduplication.
///
/// Evaluation is pure: identical arguments always yield identical
/// results, nothing is mutated, and calls are safe from any number of
/// threads.
///
/// # Errors
///
/// Returns [`ConstraintError`] when the engine rejects a generated
/// pattern or fails at match time. Neither can happen for catalog
/// rules with sane thresholds; the error is surfaced rather than
/// treated as a failed match.
///
/// # Examples
///
/// ```
/// use fieldcheck::{validate_text, Constraint, Rule};
///
/// let constraints = [
///     Constraint::new(Rule::numbers(), "At least 1 number"),
///     Constraint::new(Rule::MinCharacters { min: 8 }, "Minimum 8 characters"),
/// ];
///
/// assert_eq!(validate_text("Pa55word!", &constraints).unwrap(), None);
/// assert_eq!(
///     validate_text("short", &constraints).unwrap(),
///     Some(vec![
///         "At least 1 number".to_string(),
///         "Minimum 8 characters".to_string(),
///     ]),
/// );
/// ```
pub fn validate_text(text: &str, constraints: &[Constraint]) -> Result<Option<Vec<String>>> {
    let mut failures = Vec::new();

    for constraint in constraints {
        let pattern = constraint.rule.pattern();
        let regex = Regex::new(&pattern).map_err(|source| ConstraintError::InvalidPattern {
            pattern: pattern.clone(),
            source: Box::new(source),
        })?;
        let matched = regex
            .is_match(text)
            .map_err(|source| ConstraintError::Evaluation {
                pattern: pattern.clone(),
                source: Box::new(source),
            })?;

        if !matched {
            failures.push(constraint.message.clone());
        }
    }

    if failures.is_empty() {
        Ok(None)
    } else {
        tracing::debug!(
            failed = failures.len(),
            total = constraints.len(),
            "text failed constraints"
        );
        Ok(Some(failures))
    }
}

/// Validate `text` as a URL against the literal text.
///
/// Returns `None` when `text` matches the catalog's URL pattern,
/// otherwise `Some(error_message)`.
///
/// # Examples
///
/// ```
/// use fieldcheck::validate_url;
///
/// assert_eq!(validate_url("https://example.com", "Url invalid"), None);
/// assert_eq!(
///     validate_url("not a url", "Url invalid"),
///     Some("Url invalid".to_string()),
/// );
/// ```
pub fn validate_url(text: &str, error_message: &str) -> Option<String> {
    let matched = URL_REGEX.is_match(text).unwrap_or_else(|e| {
        tracing::warn!("URL pattern evaluation failed: {}", e);
        false
    });

    if matched {
        None
    } else {
        Some(error_message.to_string())
    }
}

/// Builder for an ordered, reusable list of constraints.
///
/// # Examples
///
/// ```
/// use fieldcheck::{ConstraintSet, Rule};
///
/// let password = ConstraintSet::new()
///     .constraint(Rule::numbers(), "At least 1 number")
///     .constraint(Rule::capital_letters(), "At least 1 capital letter")
///     .constraint(Rule::MinCharacters { min: 8 }, "Minimum 8 characters")
///     .constraint(Rule::special_characters(), "At least 1 special character");
///
/// assert_eq!(password.validate("Pa55word!").unwrap(), None);
/// assert!(password.validate("weak").unwrap().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Create an empty constraint set.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Append a constraint; evaluation order is append order.
    pub fn constraint(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.constraints.push(Constraint::new(rule, message));
        self
    }

    /// The constraints in evaluation order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Evaluate every constraint against `text`.
    ///
    /// See [`validate_text`].
    pub fn validate(&self, text: &str) -> Result<Option<Vec<String>>> {
        validate_text(text, &self.constraints)
    }
}
