//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{NewUser, User, UserPatch, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{InMemoryUserRepository, UserDirectory};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_directory: Arc<dyn UserDirectoryTrait>,
}

impl AppState {
    pub fn new(user_directory: Arc<dyn UserDirectoryTrait>) -> Self {
        Self { user_directory }
    }

    /// State backed by a fresh, empty in-memory directory
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryUserRepository::new());
        Self::new(Arc::new(UserDirectory::new(repository)))
    }
}

/// Trait for user directory operations
#[async_trait::async_trait]
pub trait UserDirectoryTrait: Send + Sync {
    async fn create(&self, input: NewUser) -> Result<User, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: &str) -> Result<User, DomainError>;
    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserDirectoryTrait for UserDirectory<R> {
    async fn create(&self, input: NewUser) -> Result<User, DomainError> {
        UserDirectory::create(self, input).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserDirectory::list(self).await
    }

    async fn get(&self, id: &str) -> Result<User, DomainError> {
        UserDirectory::get(self, id).await
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, DomainError> {
        UserDirectory::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        UserDirectory::delete(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserDirectory::count(self).await
    }
}
