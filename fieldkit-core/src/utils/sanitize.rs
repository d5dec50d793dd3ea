//! # Field Sanitization & Validation
//!
//! Composable validation filters ([`Sanitize`]) applied to raw console lines.
//! Filters run in order and short-circuit on the first failure, returning a
//! [`FilterError`] whose `Display` is the message shown to the user before the
//! prompt is repeated.
//!
//! ## Field grammars
//! Every semantic field has one grammar, exposed through [`FieldKind::matches`]:
//!
//! | Field      | Rule                                                                 |
//! |------------|----------------------------------------------------------------------|
//! | `Username` | 5-32 chars, alphanumeric plus `.`/`_`, no leading/trailing/doubled `.`/`_` |
//! | `Password` | >= 6 chars, no whitespace, an upper, a lower and a digit, no `\` or `;` |
//! | `Name`     | letters, digits, spaces, apostrophe, period                          |
//! | `Phone`    | exactly 10 digits                                                    |
//! | `Email`    | `word[extra]@domain.tld` with a 2-6 letter TLD                        |
//! | `Date`     | `dd/mm/yyyy`, calendar-valid                                         |
//!
//! Pattern checks are case-insensitive. Option matching ([`Sanitize::MatchStrings`])
//! is exact.
//!
//! ## Example
//! ```rust
//! use fieldkit_core::utils::FieldKind;
//!
//! assert!(FieldKind::Username.matches("john_doe"));
//! assert!(!FieldKind::Username.matches("_john"));
//! assert!(FieldKind::Date.matches("29/02/2024"));
//! assert!(!FieldKind::Date.matches("29/02/2023"));
//! ```
use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use std::{fmt::Display, sync::LazyLock};
use thiserror::Error;

/// Semantic field types, each with a fixed grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Username,
    Password,
    Name,
    Phone,
    Email,
    Date,
}

/// Represents a validation filter that can be applied to a console line.
///
/// - `MatchStrings`: the line must equal one of the options exactly (case-sensitive).
/// - `IsNumber`: the trimmed line must parse as an `f64`.
/// - `IsBetween`: the trimmed line must parse as an `f64` inside `[min, max]`.
/// - `Field`: the line must satisfy the grammar of a [`FieldKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitize {
    MatchStrings(Vec<String>),
    IsNumber,
    IsBetween(f64, f64),
    Field(FieldKind),
}

/// Anything that can accept or reject a line.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterError>;
}

/// Why a line was rejected. The `Display` text is what the user sees.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Invalid Input, expected one of: {}", .0.join(", "))]
    MatchStrings(Vec<String>),
    #[error("Invalid Number Format")]
    Number,
    #[error("Number Entered Was Not In Range ({0} - {1})")]
    Between(f64, f64),
    #[error("{0}")]
    Field(FieldKind),
}

static USERNAME: LazyLock<Regex> = LazyLock::new(|| grammar(r"^[a-z0-9]+(?:[._][a-z0-9]+)*$"));
static NAME: LazyLock<Regex> = LazyLock::new(|| grammar(r"^[a-z0-9 '.]+$"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| grammar(r"^[0-9]{10}$"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    grammar(r"^[a-z0-9_]+[a-z0-9._%+-]?@[a-z0-9.-]+\.[a-z]{2,6}$")
});
static DATE: LazyLock<Regex> = LazyLock::new(|| grammar(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$"));

/// Compiles an ASCII, case-insensitive field grammar.
fn grammar(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(false)
        .build()
        .expect("field grammar is a valid pattern")
}

impl FieldKind {
    /// Returns `true` if `input` satisfies this field's grammar.
    ///
    /// The empty string never matches; callers that accept an empty field
    /// check for it before calling this.
    pub fn matches(&self, input: &str) -> bool {
        match self {
            FieldKind::Username => (5..=32).contains(&input.len()) && USERNAME.is_match(input),
            FieldKind::Password => is_strong_password(input),
            FieldKind::Name => NAME.is_match(input),
            FieldKind::Phone => PHONE.is_match(input),
            FieldKind::Email => EMAIL.is_match(input),
            FieldKind::Date => {
                DATE.is_match(input) && NaiveDate::parse_from_str(input, "%d/%m/%Y").is_ok()
            }
        }
    }
}

fn is_strong_password(input: &str) -> bool {
    input.chars().count() >= 6
        && !input.chars().any(char::is_whitespace)
        && input.chars().any(|c| c.is_ascii_uppercase())
        && input.chars().any(|c| c.is_ascii_lowercase())
        && input.chars().any(|c| c.is_ascii_digit())
        && !input.contains(['\\', ';'])
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Username => write!(
                f,
                "Invalid Username (Must not contain space and special characters)"
            ),
            Self::Password => write!(
                f,
                "\nInvalid Format, A Password Must Have\n\
                 At least 1 upper case letter\n\
                 At least 1 lower case letter\n\
                 At least 1 number\n\
                 No white space, backslash or semicolon\n\
                 At least 6 characters total\n"
            ),
            Self::Name => write!(f, "Invalid Name"),
            Self::Phone => write!(f, "Invalid Phone Number"),
            Self::Email => write!(f, "Invalid Email"),
            Self::Date => write!(f, "Invalid Date (dd/mm/yyyy)"),
        }
    }
}

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Stops and returns the first error encountered.
    /// - Returns the answer unchanged if all filters pass.
    pub fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, FilterError> {
        for filter in filters {
            filter.validate(answer)?;
        }
        Ok(answer.to_string())
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterError> {
        match self {
            Sanitize::MatchStrings(options) => {
                if options.iter().any(|o| o == input) {
                    Ok(())
                } else {
                    Err(FilterError::MatchStrings(options.clone()))
                }
            }
            Sanitize::IsNumber => parse_number(input).map(|_| ()),
            Sanitize::IsBetween(min, max) => {
                let n = parse_number(input)?;
                if n >= *min && n <= *max {
                    Ok(())
                } else {
                    Err(FilterError::Between(*min, *max))
                }
            }
            Sanitize::Field(kind) => {
                if kind.matches(input) {
                    Ok(())
                } else {
                    Err(FilterError::Field(*kind))
                }
            }
        }
    }
}

/// Parses a console line as a floating-point number, ignoring surrounding whitespace.
pub(crate) fn parse_number(input: &str) -> Result<f64, FilterError> {
    input.trim().parse::<f64>().map_err(|_| FilterError::Number)
}
