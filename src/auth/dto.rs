use serde::{Deserialize, Serialize};

use crate::auth::repo_types::User;

/// Request body for account registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Response returned after login or register.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub status: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            status: u.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_serialization() {
        let response = PublicUser {
            id: 1,
            email: "test@example.com".to_string(),
            status: "active".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(json.contains("active"));
    }

    #[test]
    fn user_record_never_serializes_the_hash() {
        let user = User {
            id: 1,
            email: "test@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            status: "active".to_string(),
            created_at: time::OffsetDateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password_hash"));
    }
}
