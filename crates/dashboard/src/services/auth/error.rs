//! Authentication error types.

use thiserror::Error;

/// A signup form field, in the order fields are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    Name,
    Email,
    Phone,
    Aadhaar,
    Pan,
    Password,
    ConfirmPassword,
}

impl SignupField {
    /// All fields in validation order.
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Aadhaar,
        Self::Pan,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Form key, as it appears in the missing-field message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl std::fmt::Display for SignupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur during login or signup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A required signup field was empty.
    #[error("missing field: {0}")]
    MissingField(SignupField),

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Email failed format validation.
    #[error("invalid email")]
    InvalidEmail,

    /// Phone failed format validation.
    #[error("invalid phone number")]
    InvalidPhone,

    /// Aadhaar number is not 12 digits.
    #[error("invalid aadhaar number")]
    InvalidAadhaar,

    /// PAN is not in `AAAAA9999A` form.
    #[error("invalid pan")]
    InvalidPan,

    /// Login email or password was empty.
    #[error("empty credential")]
    EmptyCredential,
}

impl AuthError {
    /// The notification text shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField(field) => format!("Please fill the {field} field"),
            Self::PasswordMismatch => "Passwords do not match".to_string(),
            Self::InvalidEmail => "Please enter a valid email".to_string(),
            Self::InvalidPhone => "Please enter a valid phone number".to_string(),
            Self::InvalidAadhaar => "Please enter a valid 12-digit Aadhaar number".to_string(),
            Self::InvalidPan => "Please enter a valid PAN number".to_string(),
            Self::EmptyCredential => "Please fill all fields".to_string(),
        }
    }
}
