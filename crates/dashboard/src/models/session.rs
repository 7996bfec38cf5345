//! Session-related types.
//!
//! The session is the single persisted record: who is signed in and which
//! side of the marketplace they are acting on.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use rentzy_core::{Role, SessionId};

/// Identity details carried by a session.
///
/// Values are stored exactly as entered and are not re-validated when a
/// session is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub aadhaar: String,
    pub pan: String,
}

impl Profile {
    /// The fixed demo identity used by password and Google login.
    ///
    /// Login has no account backend, so only the email varies.
    #[must_use]
    pub fn demo(email: impl Into<String>) -> Self {
        Self {
            name: "John Doe".to_string(),
            email: email.into(),
            phone: "+91 9876543210".to_string(),
            aadhaar: "1234-5678-9012".to_string(),
            pan: "ABCDE1234F".to_string(),
        }
    }
}

/// The signed-in user.
///
/// Serialized as a flat object (`id`, `name`, `email`, `phone`, `aadhaar`,
/// `pan`, `type`) so records written by earlier builds keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    #[serde(flatten)]
    profile: Profile,
    #[serde(rename = "type")]
    role: Role,
}

impl Session {
    /// Create a session with an explicit ID.
    #[must_use]
    pub const fn new(id: SessionId, profile: Profile, role: Role) -> Self {
        Self { id, profile, role }
    }

    /// Start a new session now; the ID is the creation time in milliseconds.
    #[must_use]
    pub fn start(profile: Profile, role: Role) -> Self {
        Self::new(SessionId::new(Utc::now().timestamp_millis()), profile, role)
    }

    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The role is the only field that changes after creation.
    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }
}

/// Storage keys for persisted records.
pub mod keys {
    /// Key for the current signed-in user.
    pub const CURRENT_USER: &str = "rentzyUser";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile() {
        let profile = Profile::demo("someone@example.com");
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, "someone@example.com");
        assert_eq!(profile.phone, "+91 9876543210");
        assert_eq!(profile.aadhaar, "1234-5678-9012");
        assert_eq!(profile.pan, "ABCDE1234F");
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let session = Session::new(
            SessionId::new(1_705_312_800_000),
            Profile::demo("john@example.com"),
            Role::Owner,
        );
        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value["id"], 1_705_312_800_000_i64);
        assert_eq!(value["name"], "John Doe");
        assert_eq!(value["email"], "john@example.com");
        assert_eq!(value["phone"], "+91 9876543210");
        assert_eq!(value["aadhaar"], "1234-5678-9012");
        assert_eq!(value["pan"], "ABCDE1234F");
        assert_eq!(value["type"], "owner");
    }

    #[test]
    fn test_loads_flat_record() {
        let json = r#"{
            "id": 1705312800000,
            "name": "Asha Rao",
            "email": "asha@example.in",
            "phone": "+91 90000 00000",
            "type": "renter",
            "aadhaar": "1111 2222 3333",
            "pan": "abcde1234f"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();

        assert_eq!(session.id(), SessionId::new(1_705_312_800_000));
        assert_eq!(session.role(), Role::Renter);
        assert_eq!(session.profile().name, "Asha Rao");
        assert_eq!(session.profile().pan, "abcde1234f");
    }

    #[test]
    fn test_start_assigns_timestamp_id() {
        let before = Utc::now().timestamp_millis();
        let session = Session::start(Profile::demo("a@b.co"), Role::Renter);
        let after = Utc::now().timestamp_millis();

        assert!(session.id().get() >= before);
        assert!(session.id().get() <= after);
    }
}
