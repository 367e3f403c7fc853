//! User model and related functionality

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a user plays on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Landlord,
    Client,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Landlord => "LANDLORD",
            UserRole::Client => "CLIENT",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LANDLORD" => Ok(UserRole::Landlord),
            "CLIENT" => Ok(UserRole::Client),
            other => Err(anyhow::anyhow!("Unknown user role: {}", other)),
        }
    }
}

/// User entity
///
/// The identifier is a string chosen by the client or generated on first
/// save. The password hash is never serialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Option<UserRole>,
    #[serde(skip)]
    pub password_hash: Option<String>,
}

/// Create-or-overwrite payload for users
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default)]
    pub user_id: Option<String>,
    pub username: String,
    #[serde(alias = "userEmail")]
    pub email: String,
    #[serde(default, alias = "userPhone")]
    pub phone: Option<String>,
    #[serde(default, alias = "userAddress")]
    pub address: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialised() {
        let user = User {
            user_id: "u1".to_string(),
            username: "amara".to_string(),
            email: "amara@example.com".to_string(),
            phone: None,
            address: None,
            role: Some(UserRole::Landlord),
            password_hash: Some("$argon2id$secret".to_string()),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["role"], "LANDLORD");
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains("secret"));
    }

    #[test]
    fn test_role_round_trips_through_its_column_text() {
        for role in [UserRole::Landlord, UserRole::Client] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("ADMIN".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_payload_accepts_missing_optional_fields() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"username":"kofi","email":"kofi@example.com"}"#).unwrap();
        assert!(payload.user_id.is_none());
        assert!(payload.password.is_none());
        assert!(payload.role.is_none());
    }

    #[test]
    fn test_payload_accepts_prefixed_contact_fields() {
        let payload: UserPayload = serde_json::from_value(serde_json::json!({
            "username": "esi",
            "userEmail": "esi@example.com",
            "userPhone": "0201112222",
            "userAddress": "Tema"
        }))
        .unwrap();
        assert_eq!(payload.email, "esi@example.com");
        assert_eq!(payload.phone.as_deref(), Some("0201112222"));
        assert_eq!(payload.address.as_deref(), Some("Tema"));
    }
}
