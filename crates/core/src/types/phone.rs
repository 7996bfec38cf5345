//! Phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9]{10,15}$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The digits do not form a 10-15 digit number with an optional leading `+`.
    #[error("phone number must be 10-15 digits with an optional leading +")]
    Malformed,
}

/// A phone number as entered by the user.
///
/// Whitespace is ignored when validating, so `+91 98765 43210` is accepted.
/// The entered text is kept; [`PhoneNumber::normalized`] returns the
/// whitespace-free form.
///
/// ```
/// use rentzy_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("+91 9876543210").is_ok());
/// assert!(PhoneNumber::parse("98765").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::Empty`] for an empty input and
    /// [`PhoneError::Malformed`] if, with whitespace removed, the input is not
    /// 10-15 digits optionally prefixed by `+`.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !PHONE_RE.is_match(&strip_whitespace(s)) {
            return Err(PhoneError::Malformed);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number exactly as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the phone number with all whitespace removed.
    #[must_use]
    pub fn normalized(&self) -> String {
        strip_whitespace(&self.0)
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        assert!(PhoneNumber::parse("9876543210").is_ok());
        assert!(PhoneNumber::parse("+919876543210").is_ok());
        assert!(PhoneNumber::parse("+91 98765 43210").is_ok());
        assert!(PhoneNumber::parse("123456789012345").is_ok());
    }

    #[test]
    fn test_parse_length_bounds() {
        assert_eq!(PhoneNumber::parse("987654321"), Err(PhoneError::Malformed));
        assert_eq!(
            PhoneNumber::parse("1234567890123456"),
            Err(PhoneError::Malformed)
        );
    }

    #[test]
    fn test_parse_rejects_hyphens_and_letters() {
        assert_eq!(
            PhoneNumber::parse("98765-43210"),
            Err(PhoneError::Malformed)
        );
        assert_eq!(PhoneNumber::parse("98765abcde"), Err(PhoneError::Malformed));
        assert_eq!(PhoneNumber::parse("9876+543210"), Err(PhoneError::Malformed));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PhoneNumber::parse(""), Err(PhoneError::Empty));
        assert_eq!(PhoneNumber::parse("   "), Err(PhoneError::Malformed));
    }

    #[test]
    fn test_keeps_entered_text() {
        let phone = PhoneNumber::parse("+91 9876543210").unwrap();
        assert_eq!(phone.as_str(), "+91 9876543210");
        assert_eq!(phone.normalized(), "+919876543210");
    }
}
