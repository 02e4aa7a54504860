// Extension trait surface for validating text in place

use crate::{Constraint, Result, rules};

/// Extension trait putting the validation operations on the text itself.
///
/// Implemented for `str`, so both `&str` and `String` values can be
/// validated method-style:
///
/// ```
/// use fieldcheck::{Constraint, Rule, ValidateText};
///
/// let errors = "user@example.com"
///     .validate_text(&[Constraint::new(Rule::Email, "bad email")])
///     .unwrap();
/// assert_eq!(errors, None);
///
/// assert_eq!("not a url".validate_url("Url invalid").as_deref(), Some("Url invalid"));
/// ```
pub trait ValidateText {
    /// See [`crate::validate_text`].
    fn validate_text(&self, constraints: &[Constraint]) -> Result<Option<Vec<String>>>;

    /// See [`crate::validate_url`].
    fn validate_url(&self, error_message: &str) -> Option<String>;
}

impl ValidateText for str {
    fn validate_text(&self, constraints: &[Constraint]) -> Result<Option<Vec<String>>> {
        rules::validate_text(self, constraints)
    }

    fn validate_url(&self, error_message: &str) -> Option<String> {
        rules::validate_url(self, error_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rule;

    #[test]
    fn test_str_extension_delegates() {
        let constraints = [Constraint::new(Rule::OnlyLetters, "letters only")];

        assert_eq!("hello".validate_text(&constraints).unwrap(), None);
        assert_eq!(
            "hello1".validate_text(&constraints).unwrap(),
            Some(vec!["letters only".to_string()]),
        );
    }

    #[test]
    fn test_string_gets_the_impl_through_deref() {
        let text = String::from("https://example.com");
        assert_eq!(text.validate_url("invalid"), None);
    }
}
