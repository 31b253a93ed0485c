//! User identity and profile types.

use serde::Serialize;

/// Server-assigned unique user identifier.
///
/// Wraps the `BIGSERIAL` primary key of the `users` table. Construction from
/// untrusted input happens in the inbound validation layer; the domain only
/// ever sees well-formed identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Uid(i64);

impl Uid {
    /// Wrap a raw identifier.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw integer value for persistence adapters.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields required to register a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// Avatar URL shown in the app.
    pub profile_url: String,
    /// Push-messaging token for the user's device.
    pub message_token: String,
}

/// Replacement profile fields for an existing user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// Avatar URL shown in the app.
    pub profile_url: String,
}

/// Profile view returned by the credential lookup.
///
/// Serialised field names match the legacy wire contract consumed by the
/// mobile client, hence the PascalCase renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct UserProfile {
    /// Server-assigned identifier.
    #[serde(rename = "UID")]
    #[schema(value_type = i64)]
    pub uid: Uid,
    /// Given name.
    #[serde(rename = "FirstName")]
    pub first_name: String,
    /// Family name.
    #[serde(rename = "LastName")]
    pub last_name: String,
    /// Unique email address.
    #[serde(rename = "Email")]
    pub email: String,
    /// Avatar URL shown in the app.
    #[serde(rename = "ProfileURL")]
    pub profile_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn uid_serialises_as_bare_integer() {
        let value = serde_json::to_value(Uid::new(42)).expect("serialise uid");
        assert_eq!(value, json!(42));
    }

    #[rstest]
    fn profile_serialises_with_legacy_field_names() {
        let profile = UserProfile {
            uid: Uid::new(7),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            profile_url: "https://example.com/ada.jpg".to_owned(),
        };

        let value = serde_json::to_value(profile).expect("serialise profile");
        assert_eq!(value.get("UID"), Some(&json!(7)));
        assert_eq!(
            value.get("FirstName").and_then(Value::as_str),
            Some("Ada")
        );
        assert_eq!(
            value.get("ProfileURL").and_then(Value::as_str),
            Some("https://example.com/ada.jpg")
        );
        assert!(value.get("first_name").is_none());
    }
}
