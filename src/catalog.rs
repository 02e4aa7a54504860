// Rule catalog: closed set of validation rules and their regex patterns

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A validation rule from the closed catalog.
///
/// Each rule derives a regular-expression pattern string via
/// [`Rule::pattern`]. Pattern generation is a total function of the
/// variant and its parameter: no external state, no failure path.
///
/// The character classes are deliberately ASCII-only (`[a-zA-Z]` and
/// friends); the catalog makes no claim of locale awareness.
///
/// # Equality
///
/// Two rules are equal iff their **derived pattern strings** are
/// textually equal, not iff their tags and parameters match. `Hash`
/// hashes the pattern string so it stays consistent with `Eq`. The
/// contract means equality conflates distinct parameterizations if
/// their patterns ever coincide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    /// Email address: `local@domain.tld`, matched as an unanchored
    /// substring.
    Email,
    /// Optional leading `+` followed by 10 to 13 digits, whole string.
    PhoneNumber,
    /// Optional scheme, optional `www.`, labeled domain, 2-6 letter
    /// tld, optional path, whole string. Lowercase only.
    Url,
    /// One or more ASCII letters and nothing else.
    OnlyLetters,
    /// One or more digits and nothing else.
    OnlyNumbers,
    /// One or more uppercase ASCII letters and nothing else.
    OnlyCapitalLetters,
    /// One or more lowercase ASCII letters and nothing else.
    OnlyLowercase,
    /// One or more non-alphanumeric characters and nothing else.
    OnlySpecialCharacter,
    /// At least `min` characters, asserted by a zero-width lookahead.
    MinCharacters { min: usize },
    /// At most `max` characters, asserted by a lookahead anchored to
    /// the whole string.
    MaxCharacters { max: usize },
    /// A run of exactly `min` consecutive ASCII letters somewhere.
    Letters { min: usize },
    /// A lookahead asserting a run of `min` consecutive uppercase
    /// letters somewhere.
    CapitalLetters { min: usize },
    /// A run of at least `min` consecutive lowercase letters somewhere.
    LowercaseLetters { min: usize },
    /// A run of exactly `min` consecutive digits somewhere.
    Numbers { min: usize },
    /// A lookahead asserting a run of `min` consecutive
    /// non-alphanumeric characters somewhere.
    SpecialCharacters { min: usize },
}

impl Rule {
    /// `Letters { min: 1 }`.
    pub const fn letters() -> Self {
        Rule::Letters { min: 1 }
    }

    /// `CapitalLetters { min: 1 }`.
    pub const fn capital_letters() -> Self {
        Rule::CapitalLetters { min: 1 }
    }

    /// `LowercaseLetters { min: 1 }`.
    pub const fn lowercase_letters() -> Self {
        Rule::LowercaseLetters { min: 1 }
    }

    /// `Numbers { min: 1 }`.
    pub const fn numbers() -> Self {
        Rule::Numbers { min: 1 }
    }

    /// `SpecialCharacters { min: 1 }`.
    pub const fn special_characters() -> Self {
        Rule::SpecialCharacters { min: 1 }
    }

    /// Derive the regular-expression pattern for this rule.
    ///
    /// Parameterized variants interpolate their threshold into a
    /// quantifier; fixed variants return a literal pattern. Several
    /// variants are zero-width lookaheads and rely on the host engine
    /// supporting them.
    pub fn pattern(&self) -> String {
        match *self {
            Rule::Email => r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}".to_string(),
            Rule::PhoneNumber => r"^[0-9+]{0,1}[0-9]{10,13}$".to_string(),
            Rule::Url => {
                r"^(https?://)?(www\.)?([-a-z0-9]{1,63}\.)*?[a-z0-9][-a-z0-9]{0,61}[a-z0-9]\.[a-z]{2,6}(/[-\w@\+\.~#\?&/=%]*)?$"
                    .to_string()
            }
            Rule::OnlyLetters => r"^[a-zA-Z]+$".to_string(),
            Rule::OnlyNumbers => r"^[0-9]+$".to_string(),
            Rule::OnlyCapitalLetters => r"^[A-Z]+$".to_string(),
            Rule::OnlyLowercase => r"^[a-z]+$".to_string(),
            Rule::OnlySpecialCharacter => r"^[^A-Za-z0-9]+$".to_string(),
            Rule::MinCharacters { min } => format!("(?=.{{{min},}})"),
            Rule::MaxCharacters { max } => format!("(?=^.{{0,{max}}}$)"),
            Rule::Letters { min } => format!("[A-Za-z]{{{min}}}"),
            Rule::CapitalLetters { min } => format!("(?=.*[A-Z]{{{min}}})"),
            Rule::LowercaseLetters { min } => format!("[a-z]{{{min},}}"),
            Rule::Numbers { min } => format!("[0-9]{{{min}}}"),
            Rule::SpecialCharacters { min } => format!("(?=.*[^A-Za-z0-9]{{{min}}})"),
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern().hash(state);
    }
}
