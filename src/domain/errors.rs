//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The candidate string is not a valid Uganda mobile number.
    InvalidUgandaNumber(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUgandaNumber(number) => {
                write!(f, "Invalid Uganda phone number: {}", number)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
