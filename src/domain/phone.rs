//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Uganda mobile numbers: `+256`, the digit `7`, then exactly 8 more digits.
static UGANDA_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+256[7][0-9]{8}$").expect("invalid phone regex"));

/// A type-safe wrapper for Uganda mobile phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// Only the fixed-length `+2567XXXXXXXX` format is admitted; there is no
/// normalization, so the wrapped string is exactly what the caller passed.
///
/// # Example
///
/// ```
/// use uganda_directory::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+256701234567").unwrap();
/// assert_eq!(phone.as_str(), "+256701234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must start with `+256` followed by the digit `7`
    /// - Exactly 8 further decimal digits (total length 13)
    /// - No surrounding whitespace or extension characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUgandaNumber` if the format is invalid.
    pub fn new(number: impl Into<String>) -> Result<Self, ValidationError> {
        let number = number.into();

        if !Self::is_valid(&number) {
            return Err(ValidationError::InvalidUgandaNumber(number));
        }

        Ok(Self(number))
    }

    /// Check whether a candidate string is an admissible Uganda mobile number.
    ///
    /// Pure and total: never panics, never blocks.
    pub fn is_valid(candidate: &str) -> bool {
        UGANDA_PHONE_REGEX.is_match(candidate)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
