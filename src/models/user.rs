//! User model and related payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User entity as stored. Never serialized to clients directly; the API
/// returns [`UserResponse`], which carries no password hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// Request for user registration
///
/// Fields are optional so that missing values surface as a 400 validation
/// error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// User view returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            username: "maya".to_string(),
            email: "maya@example.com".to_string(),
            password_hash: "$argon2id$opaque".to_string(),
            full_name: "Maya K".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_response_excludes_password() {
        let response = UserResponse::from(sample_user());
        let value = serde_json::to_value(&response).unwrap();

        let object = value.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
        assert_eq!(object["username"], "maya");
        assert_eq!(object["email"], "maya@example.com");
    }

    #[test]
    fn test_update_request_partial_fields() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"full_name": "Maya Khan"}"#).unwrap();
        assert_eq!(request.full_name.as_deref(), Some("Maya Khan"));
        assert!(request.email.is_none());
    }

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        let request: RegisterRequest = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert!(request.username.is_none());
        assert_eq!(request.email.as_deref(), Some("a@b.c"));
        assert!(request.password.is_none());
    }
}
