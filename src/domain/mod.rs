//! Domain layer - entities, validation and repository traits

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{Email, NewUser, User, UserId, UserPatch, UserRepository};
