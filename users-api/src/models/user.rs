//! User model - directory-owned user records and their sanitized projection.

use serde::{Deserialize, Serialize};

/// User record as the directory stores it.
///
/// Owns the password hash; never leaves the directory through general
/// fetch operations.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

impl User {
    pub fn new(
        id: i64,
        email: String,
        username: String,
        password_hash: String,
        roles: Vec<String>,
    ) -> Self {
        Self {
            id,
            email,
            username,
            password_hash,
            roles,
        }
    }

    /// Convert to sanitized representation (no sensitive fields).
    pub fn sanitized(&self) -> SanitizedUser {
        SanitizedUser::from(self.clone())
    }
}

/// User representation free of secret material.
///
/// The guarantee is structural: the type has no password-bearing field,
/// so no code path can leak one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizedUser {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub roles: Vec<String>,
}

impl From<User> for SanitizedUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
            roles: u.roles,
        }
    }
}
