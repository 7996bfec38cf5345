//! Authentication service.
//!
//! Login is mocked: any non-empty email and password sign in as the demo
//! identity. Signup validates every field before creating a session from
//! the entered values.

mod error;

pub use error::{AuthError, SignupField};

use secrecy::{ExposeSecret, SecretString};

use rentzy_core::{Aadhaar, Email, Pan, PhoneNumber, Role};

use crate::models::session::{Profile, Session};

/// Email assigned by the mocked Google login.
pub const GOOGLE_DEMO_EMAIL: &str = "john.doe@gmail.com";

/// Fields submitted on the signup tab.
///
/// Implements `Debug` manually to redact the passwords.
#[derive(Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub aadhaar: String,
    pub pan: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl std::fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("aadhaar", &self.aadhaar)
            .field("pan", &self.pan)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl SignupForm {
    fn field(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Email => &self.email,
            SignupField::Phone => &self.phone,
            SignupField::Aadhaar => &self.aadhaar,
            SignupField::Pan => &self.pan,
            SignupField::Password => self.password.expose_secret(),
            SignupField::ConfirmPassword => self.confirm_password.expose_secret(),
        }
    }

    /// Validate the form, stopping at the first failing rule.
    ///
    /// Rules run in a fixed order: every field present, passwords match,
    /// then email, phone, Aadhaar and PAN formats.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] for the first rule that fails.
    pub fn validate(&self) -> Result<(), AuthError> {
        if let Some(field) = SignupField::ALL
            .into_iter()
            .find(|&field| self.field(field).is_empty())
        {
            return Err(AuthError::MissingField(field));
        }

        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(AuthError::PasswordMismatch);
        }

        Email::parse(&self.email).map_err(|_| AuthError::InvalidEmail)?;
        PhoneNumber::parse(&self.phone).map_err(|_| AuthError::InvalidPhone)?;
        Aadhaar::parse(&self.aadhaar).map_err(|_| AuthError::InvalidAadhaar)?;
        Pan::parse(&self.pan).map_err(|_| AuthError::InvalidPan)?;

        Ok(())
    }

    /// Profile built from the raw entered values.
    fn into_profile(self) -> Profile {
        Profile {
            name: self.name,
            email: self.email,
            phone: self.phone,
            aadhaar: self.aadhaar,
            pan: self.pan,
        }
    }
}

// =============================================================================
// Session Construction
// =============================================================================

/// Sign in with email and password.
///
/// # Errors
///
/// Returns `AuthError::EmptyCredential` if either value is empty.
pub fn login_with_password(
    email: &str,
    password: &SecretString,
    role: Role,
) -> Result<Session, AuthError> {
    if email.is_empty() || password.expose_secret().is_empty() {
        return Err(AuthError::EmptyCredential);
    }

    Ok(Session::start(Profile::demo(email), role))
}

/// Create an account from the signup form.
///
/// # Errors
///
/// Returns the first validation failure, see [`SignupForm::validate`].
pub fn register(form: SignupForm, role: Role) -> Result<Session, AuthError> {
    form.validate()?;
    Ok(Session::start(form.into_profile(), role))
}

/// Mocked federated sign-in. Always succeeds.
#[must_use]
pub fn google_login(role: Role) -> Session {
    Session::start(Profile::demo(GOOGLE_DEMO_EMAIL), role)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            name: "Asha Rao".to_string(),
            email: "asha@example.in".to_string(),
            phone: "+91 98765 43210".to_string(),
            aadhaar: "1234-5678-9012".to_string(),
            pan: "abcde1234f".to_string(),
            password: SecretString::from("hunter22"),
            confirm_password: SecretString::from("hunter22"),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_missing_field_checked_first() {
        let form = SignupForm {
            name: String::new(),
            confirm_password: SecretString::from("different"),
            ..valid_form()
        };
        assert_eq!(
            form.validate(),
            Err(AuthError::MissingField(SignupField::Name))
        );
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let form = SignupForm {
            phone: String::new(),
            pan: String::new(),
            ..valid_form()
        };
        assert_eq!(
            form.validate(),
            Err(AuthError::MissingField(SignupField::Phone))
        );

        let form = SignupForm {
            confirm_password: SecretString::from(""),
            ..valid_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, AuthError::MissingField(SignupField::ConfirmPassword));
        assert_eq!(err.user_message(), "Please fill the confirmPassword field");
    }

    #[test]
    fn test_password_mismatch_before_format_checks() {
        let form = SignupForm {
            email: "not-an-email".to_string(),
            confirm_password: SecretString::from("hunter23"),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(AuthError::PasswordMismatch));
    }

    #[test]
    fn test_format_checks_in_order() {
        let form = SignupForm {
            email: "asha@example".to_string(),
            phone: "123".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(AuthError::InvalidEmail));

        let form = SignupForm {
            phone: "123".to_string(),
            aadhaar: "1".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(AuthError::InvalidPhone));

        let form = SignupForm {
            aadhaar: "1234-5678-901".to_string(),
            pan: "bad".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(AuthError::InvalidAadhaar));

        let form = SignupForm {
            pan: "ABCD12345F".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(AuthError::InvalidPan));
    }

    #[test]
    fn test_register_keeps_raw_values() {
        let session = register(valid_form(), Role::Owner).unwrap();
        assert_eq!(session.role(), Role::Owner);
        assert_eq!(session.profile().pan, "abcde1234f");
        assert_eq!(session.profile().phone, "+91 98765 43210");
    }

    #[test]
    fn test_login_requires_both_values() {
        let password = SecretString::from("x");
        assert_eq!(
            login_with_password("", &password, Role::Renter),
            Err(AuthError::EmptyCredential)
        );
        assert_eq!(
            login_with_password("a@b.co", &SecretString::from(""), Role::Renter),
            Err(AuthError::EmptyCredential)
        );
    }

    #[test]
    fn test_login_has_no_format_check() {
        let session =
            login_with_password("not an email", &SecretString::from("x"), Role::Owner).unwrap();
        assert_eq!(session.profile().email, "not an email");
        assert_eq!(session.profile().name, "John Doe");
        assert_eq!(session.role(), Role::Owner);
    }

    #[test]
    fn test_google_login_uses_demo_identity() {
        let session = google_login(Role::Renter);
        assert_eq!(session.profile().email, GOOGLE_DEMO_EMAIL);
        assert_eq!(session.role(), Role::Renter);
    }

    #[test]
    fn test_signup_form_debug_redacts_passwords() {
        let debug_output = format!("{:?}", valid_form());
        assert!(debug_output.contains("asha@example.in"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter22"));
    }
}
