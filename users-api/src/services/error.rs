use service_core::error::AppError;
use thiserror::Error;

/// Failures from the user directory collaborator.
///
/// `NotFound` is recovered by the orchestrator and never surfaces raw
/// from `validate_user`.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("User not found")]
    NotFound,

    #[error("Directory backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Single user-visible failure for any credential mismatch. Unknown
    /// email and wrong password must stay indistinguishable, message
    /// included, to prevent user enumeration.
    #[error("unable to validate user")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                AppError::AuthError(anyhow::anyhow!("unable to validate user"))
            }
            ServiceError::InvalidToken => AppError::BadRequest(anyhow::anyhow!("Invalid token")),
            ServiceError::Internal(e) => AppError::InternalError(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failure_message_is_fixed() {
        assert_eq!(
            ServiceError::InvalidCredentials.to_string(),
            "unable to validate user"
        );
    }
}
