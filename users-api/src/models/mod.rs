pub mod user;

pub use user::{SanitizedUser, User};
