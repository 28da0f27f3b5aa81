use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::{SanitizedUser, User};
use crate::services::DirectoryError;

/// Lookup service resolving users by email.
///
/// The password hash is reachable only through `password_hash`; the
/// general fetch path cannot return it. Keeping these two operations
/// separate is what enforces the invariant - there is no runtime check.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Stored password hash for the email.
    async fn password_hash(&self, email: &str) -> Result<String, DirectoryError>;

    /// Sanitized user for the email. Never includes the hash.
    async fn find_user(&self, email: &str) -> Result<SanitizedUser, DirectoryError>;
}

/// In-memory directory keyed by email.
///
/// The only storage this crate ships; real persistence belongs to a
/// backing store behind the same trait. Reusable across tests without
/// per-test configuration.
#[derive(Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with pre-built records.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let directory = Self::new();
        for user in users {
            directory.insert(user);
        }
        directory
    }

    /// Insert or replace a record. Last write for an email wins.
    pub fn insert(&self, user: User) {
        self.users
            .write()
            .expect("user map lock poisoned")
            .insert(user.email.clone(), user);
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn password_hash(&self, email: &str) -> Result<String, DirectoryError> {
        self.users
            .read()
            .map_err(|e| DirectoryError::Backend(anyhow::anyhow!("user map lock poisoned: {}", e)))?
            .get(email)
            .map(|user| user.password_hash.clone())
            .ok_or(DirectoryError::NotFound)
    }

    async fn find_user(&self, email: &str) -> Result<SanitizedUser, DirectoryError> {
        self.users
            .read()
            .map_err(|e| DirectoryError::Backend(anyhow::anyhow!("user map lock poisoned: {}", e)))?
            .get(email)
            .map(User::sanitized)
            .ok_or(DirectoryError::NotFound)
    }
}
