//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a field value fails its validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 ASCII digits.
    InvalidPhone(String),

    /// A birthday was requested but no date was supplied.
    MissingDateOfBirth,

    /// The provided date is not a real `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "phone must contain 10 digits"),
            Self::MissingDateOfBirth => write!(f, "missing date of birth"),
            Self::InvalidDate(date) => write!(
                f,
                "wrong format, date of birth should be YYYY-MM-DD, got: {}",
                date
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
