//! Government identity numbers collected at signup.
//!
//! - [`Aadhaar`] - 12-digit national identity number, commonly written in
//!   groups of four separated by spaces or hyphens.
//! - [`Pan`] - Permanent Account Number: five letters, four digits, one letter.
//!
//! Both types keep the text exactly as entered; validation runs against a
//! normalised form.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static AADHAAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("Invalid regex"));

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("Invalid regex"));

/// Errors that can occur when parsing an [`Aadhaar`] number.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AadhaarError {
    #[error("aadhaar number cannot be empty")]
    Empty,
    #[error("aadhaar number must be exactly 12 digits")]
    Malformed,
}

/// Errors that can occur when parsing a [`Pan`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PanError {
    #[error("PAN cannot be empty")]
    Empty,
    #[error("PAN must be 5 letters, 4 digits and 1 letter")]
    Malformed,
}

/// An Aadhaar number.
///
/// Hyphens and whitespace are ignored, so `1234-5678-9012` and
/// `1234 5678 9012` are both accepted.
///
/// ```
/// use rentzy_core::Aadhaar;
///
/// assert!(Aadhaar::parse("1234-5678-9012").is_ok());
/// assert!(Aadhaar::parse("1234-5678-901").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Aadhaar(String);

impl Aadhaar {
    /// Parse an `Aadhaar` number.
    ///
    /// # Errors
    ///
    /// Returns [`AadhaarError::Empty`] for an empty input and
    /// [`AadhaarError::Malformed`] if the input is not 12 digits once hyphens
    /// and whitespace are removed.
    pub fn parse(s: &str) -> Result<Self, AadhaarError> {
        if s.is_empty() {
            return Err(AadhaarError::Empty);
        }

        if !AADHAAR_RE.is_match(&strip_separators(s)) {
            return Err(AadhaarError::Malformed);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number exactly as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the bare 12 digits.
    #[must_use]
    pub fn digits(&self) -> String {
        strip_separators(&self.0)
    }
}

fn strip_separators(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

impl fmt::Display for Aadhaar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Aadhaar {
    type Err = AadhaarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A Permanent Account Number.
///
/// Matching is case-insensitive: the input is upper-cased before it is
/// checked, so `abcde1234f` is accepted.
///
/// ```
/// use rentzy_core::Pan;
///
/// assert!(Pan::parse("abcde1234f").is_ok());
/// assert!(Pan::parse("ABCD12345F").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Pan(String);

impl Pan {
    /// Parse a `Pan`.
    ///
    /// # Errors
    ///
    /// Returns [`PanError::Empty`] for an empty input and
    /// [`PanError::Malformed`] if the upper-cased input is not five letters,
    /// four digits and a letter.
    pub fn parse(s: &str) -> Result<Self, PanError> {
        if s.is_empty() {
            return Err(PanError::Empty);
        }

        if !PAN_RE.is_match(&s.to_uppercase()) {
            return Err(PanError::Malformed);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the PAN exactly as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the upper-cased PAN.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Pan {
    type Err = PanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
