use async_trait::async_trait;

use crate::utils::{hash_password, verify_password, Password, PasswordHashString};

/// Keyed-comparison service over stored password hashes.
///
/// Implementations must be safe to call concurrently; the orchestrator
/// shares one instance across all in-flight requests.
#[async_trait]
pub trait PasswordService: Send + Sync {
    /// Produce a salted one-way hash of a plaintext, for registration.
    async fn hash(&self, plaintext: &Password) -> Result<PasswordHashString, anyhow::Error>;

    /// True iff the hash was produced from this plaintext. Malformed
    /// stored hashes compare false.
    async fn compare(&self, plaintext: &Password, hash: &PasswordHashString) -> bool;
}

/// Argon2-backed implementation.
///
/// Hashing and verification are CPU-bound, so both run on the blocking
/// thread pool instead of stalling the async runtime.
#[derive(Clone, Default)]
pub struct ArgonPasswordService;

impl ArgonPasswordService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordService for ArgonPasswordService {
    async fn hash(&self, plaintext: &Password) -> Result<PasswordHashString, anyhow::Error> {
        let plaintext = plaintext.clone();
        tokio::task::spawn_blocking(move || hash_password(&plaintext))
            .await
            .map_err(|e| anyhow::anyhow!("Password hashing task failed: {}", e))?
    }

    async fn compare(&self, plaintext: &Password, hash: &PasswordHashString) -> bool {
        let plaintext = plaintext.clone();
        let hash = hash.clone();
        tokio::task::spawn_blocking(move || verify_password(&plaintext, &hash))
            .await
            .unwrap_or(false)
    }
}
