//! users-api: email/password authentication core.
//!
//! Validates credentials against a pluggable user directory and issues
//! signed JWT access tokens carrying identity and role claims. Transport,
//! persistence, and request validation live outside this crate; the
//! orchestrator takes its collaborators by constructor injection so any
//! backing store or test double can stand in.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use models::{SanitizedUser, User};
pub use services::{
    ArgonPasswordService, AuthService, InMemoryDirectory, JwtService, PasswordService,
    ServiceError, TokenResponse, UserDirectory,
};
