use std::sync::Arc;

use crate::models::SanitizedUser;
use crate::services::{
    DirectoryError, JwtService, PasswordService, ServiceError, TokenResponse, UserDirectory,
};
use crate::utils::{Password, PasswordHashString};

/// Orchestrates the user directory, password service, and token service
/// into credential validation and token issuance.
///
/// Stateless: every call is an independent request/response transform
/// and any number may run concurrently.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserDirectory>,
    passwords: Arc<dyn PasswordService>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        passwords: Arc<dyn PasswordService>,
        jwt: JwtService,
    ) -> Self {
        Self {
            users,
            passwords,
            jwt,
        }
    }

    /// Validate an email/password pair and return the sanitized user.
    ///
    /// Unknown email and wrong password fail with the same error and
    /// message, so callers cannot enumerate registered accounts.
    pub async fn validate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SanitizedUser, ServiceError> {
        let stored_hash = self
            .users
            .password_hash(email)
            .await
            .map_err(remap_lookup_failure)?;

        let matches = self
            .passwords
            .compare(
                &Password::new(password.to_string()),
                &PasswordHashString::new(stored_hash),
            )
            .await;

        if !matches {
            return Err(ServiceError::InvalidCredentials);
        }

        let user = self
            .users
            .find_user(email)
            .await
            .map_err(remap_lookup_failure)?;

        tracing::info!(user_id = user.id, "User validated");

        Ok(user)
    }

    /// Issue an access token for an already-authenticated user.
    ///
    /// Pure claims-to-token transform: no directory lookup, no password
    /// check. Callers are trusted to have run `validate_user` first.
    pub async fn login(&self, user: &SanitizedUser) -> Result<TokenResponse, ServiceError> {
        let access_token = self.jwt.sign(user).map_err(ServiceError::Internal)?;

        tracing::info!(user_id = user.id, "Access token issued");

        Ok(TokenResponse { access_token })
    }
}

/// Collapse "no such user" into the generic credential failure; let
/// backend faults through as internal errors.
fn remap_lookup_failure(err: DirectoryError) -> ServiceError {
    match err {
        DirectoryError::NotFound => ServiceError::InvalidCredentials,
        DirectoryError::Backend(e) => {
            tracing::warn!(error = %e, "User directory lookup failed");
            ServiceError::Internal(e)
        }
    }
}
