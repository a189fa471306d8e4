//! User domain
//!
//! This module provides domain types and traits for the user directory,
//! including the user entity, validated inputs, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Email, NewUser, User, UserId, UserPatch};
pub use repository::UserRepository;
pub use validation::{validate_email, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
