//! Services layer for users-api.
//!
//! Provides the credential-validation and token-issuance business logic
//! plus the collaborator traits it is wired against.

mod auth;
mod directory;
pub mod error;
mod jwt;
mod password;

pub use auth::AuthService;
pub use directory::{InMemoryDirectory, UserDirectory};
pub use error::{DirectoryError, ServiceError};
pub use jwt::{AccessTokenClaims, JwtService, TokenResponse};
pub use password::{ArgonPasswordService, PasswordService};
