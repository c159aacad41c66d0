use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A stored user account.
///
/// Deliberately not `Serialize`: the password hash must never reach a response.
/// Use [`UserProfile`] for anything sent to clients.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// The public view of a user: identifier and username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
}

/// Username and password as submitted to `/register` and `/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String, // plaintext, only ever hashed or compared
}
