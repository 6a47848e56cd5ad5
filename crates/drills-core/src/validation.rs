//! Pure input validators
//!
//! Lengths are counted in Unicode scalar values (`chars`), not bytes.
//!
//! Failure messages use the fixed marker `Invalid`; success renders as
//! `Validation successful`. Callers are expected to match either marker
//! case-insensitively.

use std::fmt;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::Error;

/// Accepted username lengths for [`is_valid_username`]
pub const USERNAME_FORMAT_LENGTH: RangeInclusive<usize> = 5..=15;

/// Accepted username lengths for [`validate_user_input`]
pub const USER_INPUT_USERNAME_LENGTH: RangeInclusive<usize> = 3..=255;

/// Accepted ages for [`validate_user_input`]
pub const USER_INPUT_AGE: RangeInclusive<f64> = 18.0..=100.0;

/// `true` iff the username has between 5 and 15 characters inclusive.
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_FORMAT_LENGTH.contains(&username.chars().count())
}

/// Outcome of a multi-field validation
///
/// Unlike a `Result`, an invalid outcome carries every failure found, not
/// just the first.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Every field passed
    Valid,
    /// One or more fields failed, in field order
    Invalid(Vec<Error>),
}

impl Validation {
    /// Collect failures into an outcome
    #[must_use]
    pub fn from_failures(failures: Vec<Error>) -> Self {
        if failures.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(failures)
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failures, empty when valid
    #[must_use]
    pub fn failures(&self) -> &[Error] {
        match self {
            Self::Valid => &[],
            Self::Invalid(failures) => failures,
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Validation successful"),
            Self::Invalid(failures) => {
                let joined = failures
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{joined}")
            }
        }
    }
}

/// Check a username/age pair, reporting both failures when both fields are
/// bad.
#[must_use]
pub fn validate_user_input(username: &str, age: f64) -> Validation {
    let failures = [check_username(username), check_age(age)]
        .into_iter()
        .filter_map(Result::err)
        .collect::<Vec<_>>();

    debug!(failures = failures.len(), "validated user input");
    Validation::from_failures(failures)
}

pub(crate) fn check_username(username: &str) -> Result<(), Error> {
    let length = username.chars().count();
    if USER_INPUT_USERNAME_LENGTH.contains(&length) {
        Ok(())
    } else {
        Err(Error::InvalidUsername(format!(
            "must be {} to {} characters, got {length}",
            USER_INPUT_USERNAME_LENGTH.start(),
            USER_INPUT_USERNAME_LENGTH.end()
        )))
    }
}

pub(crate) fn check_age(age: f64) -> Result<(), Error> {
    if USER_INPUT_AGE.contains(&age) {
        Ok(())
    } else {
        Err(Error::InvalidAge(format!(
            "must be between {} and {}, got {age}",
            USER_INPUT_AGE.start(),
            USER_INPUT_AGE.end()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(outcome: &Validation, marker: &str) -> bool {
        outcome.to_string().to_lowercase().contains(marker)
    }

    #[test]
    fn test_validate_user_input_success() {
        let outcome = validate_user_input("homayoun", 18.0);
        assert!(outcome.is_valid());
        assert!(matches(&outcome, "success"));
    }

    #[test]
    fn test_validate_user_input_short_username() {
        assert!(matches(&validate_user_input("ho", 18.0), "invalid username"));
    }

    #[test]
    fn test_validate_user_input_long_username() {
        let username = "H".repeat(256);
        assert!(matches(&validate_user_input(&username, 18.0), "invalid username"));
    }

    #[test]
    fn test_validate_user_input_username_bounds_inclusive() {
        assert!(validate_user_input("abc", 30.0).is_valid());
        assert!(validate_user_input(&"a".repeat(255), 30.0).is_valid());
    }

    #[test]
    fn test_validate_user_input_age_out_of_range() {
        assert!(matches(&validate_user_input("homayoun", 17.0), "invalid age"));
        assert!(matches(&validate_user_input("homayoun", 101.0), "invalid age"));
        assert!(matches(&validate_user_input("homayoun", f64::NAN), "invalid age"));
    }

    #[test]
    fn test_validate_user_input_age_bounds_inclusive() {
        assert!(validate_user_input("homayoun", 18.0).is_valid());
        assert!(validate_user_input("homayoun", 100.0).is_valid());
    }

    #[test]
    fn test_validate_user_input_reports_both_failures() {
        let outcome = validate_user_input("", 0.0);
        assert_eq!(outcome.failures().len(), 2);
        assert!(matches(&outcome, "invalid username"));
        assert!(matches(&outcome, "invalid age"));
    }

    #[test]
    fn test_is_valid_username_length_limits() {
        assert!(!is_valid_username(&"a".repeat(4)));
        assert!(!is_valid_username(&"a".repeat(16)));
        for length in [5, 6, 14, 15] {
            assert!(is_valid_username(&"a".repeat(length)), "length {length}");
        }
    }

    #[test]
    fn test_is_valid_username_counts_chars_not_bytes() {
        // five two-byte characters
        assert!(is_valid_username("ééééé"));
    }
}
