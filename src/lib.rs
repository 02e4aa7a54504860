//! Regex-driven constraint validation for form-field text.
//!
//! A closed catalog of validation rules ([`Rule`]), each deriving a
//! regular-expression pattern, plus an evaluator that checks a piece of
//! text against an ordered list of [`Constraint`]s and reports the
//! error messages of the ones that fail, in input order. A separate
//! single-shot check validates a value as a URL.
//!
//! The crate is a pure library surface: no I/O, no shared state, no
//! async. A UI layer (or any caller) feeds it text on every edit and
//! renders the returned messages.
//!
//! # Examples
//!
//! ## Password validation
//!
//! ```
//! use fieldcheck::{validate_text, Constraint, Rule};
//!
//! let errors = validate_text("weakpass", &[
//!     Constraint::new(Rule::numbers(), "At least 1 number"),
//!     Constraint::new(Rule::capital_letters(), "At least 1 capital letter"),
//!     Constraint::new(Rule::MinCharacters { min: 8 }, "Minimum 8 characters"),
//!     Constraint::new(Rule::special_characters(), "At least 1 special character"),
//! ]).unwrap();
//!
//! assert_eq!(errors.unwrap(), vec![
//!     "At least 1 number".to_string(),
//!     "At least 1 capital letter".to_string(),
//!     "At least 1 special character".to_string(),
//! ]);
//! ```
//!
//! ## URL validation
//!
//! ```
//! use fieldcheck::ValidateText;
//!
//! assert_eq!("https://example.com".validate_url("Url invalid"), None);
//! assert_eq!(
//!     "definitely not".validate_url("Url invalid"),
//!     Some("Url invalid".to_string()),
//! );
//! ```
//!
//! ## Reusable constraint sets
//!
//! ```
//! use fieldcheck::{ConstraintSet, Rule};
//!
//! let username = ConstraintSet::new()
//!     .constraint(Rule::OnlyLetters, "Letters only")
//!     .constraint(Rule::MaxCharacters { max: 20 }, "Maximum 20 characters");
//!
//! assert_eq!(username.validate("johndoe").unwrap(), None);
//! ```

mod catalog;
mod constraint;
mod errors;
mod rules;
mod traits;

pub use catalog::Rule;
pub use constraint::Constraint;
pub use errors::{ConstraintError, Result};
pub use rules::{ConstraintSet, probe, validate_text, validate_url};
pub use traits::ValidateText;
