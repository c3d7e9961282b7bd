//! User profile model.
//!
//! The profile is the verify-OTP response: the user record plus the
//! bearer token. It is persisted verbatim as the durable "profile" blob
//! and restored at startup, so optional fields are skipped when absent
//! to keep the stored JSON identical to what the backend returned.

use serde::{Deserialize, Serialize};

use super::UserId;

/// The authenticated user plus bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier, absent on some backend responses.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Role string (e.g. `"admin"` or `"vendor"`), absent for plain users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Bearer token attached to authenticated requests.
    pub token: String,
}

/// Body for the profile-update endpoint. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_profile() {
        let json = r#"{"name":"A","email":"a@b.com","token":"t1"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "A");
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.token, "t1");
        assert!(profile.id.is_none());
        assert!(profile.phone.is_none());
    }

    #[test]
    fn minimal_profile_serializes_without_absent_fields() {
        let profile = Profile {
            id: None,
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            phone: None,
            role: None,
            token: "t1".to_owned(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "A", "email": "a@b.com", "token": "t1"})
        );
    }

    #[test]
    fn deserialize_full_profile() {
        let json = r#"{
            "_id": "65f0000000000000000000aa",
            "name": "Asha",
            "email": "asha@example.com",
            "phone": "+91 98765 43210",
            "role": "vendor",
            "token": "jwt-token"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(
            profile.id.as_ref().map(|id| id.as_inner()),
            Some("65f0000000000000000000aa")
        );
        assert_eq!(profile.role.as_deref(), Some("vendor"));
    }

    #[test]
    fn serialize_roundtrip() {
        let profile = Profile {
            id: Some(UserId::new("u-1".to_owned())),
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: Some("+91 98765 43210".to_owned()),
            role: None,
            token: "jwt".to_owned(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, profile);
    }

    #[test]
    fn update_request_skips_unset_fields() {
        let request = UpdateProfileRequest {
            name: Some("New Name".to_owned()),
            phone: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"name": "New Name"}));
    }
}
