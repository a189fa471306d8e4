//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId, UserPatch};
use crate::domain::DomainError;

/// Repository trait for user storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user under its id
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// List all stored users
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Get a user by their ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Apply a patch to a stored user as one atomic step.
    /// Returns `None` when no user has the given ID.
    async fn update(&self, id: &UserId, patch: UserPatch) -> Result<Option<User>, DomainError>;

    /// Delete a user, returning whether it existed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;
}
