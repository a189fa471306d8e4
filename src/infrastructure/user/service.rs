//! User directory service: the create/list/get/update/delete lifecycle

use std::sync::Arc;

use crate::domain::user::{NewUser, User, UserId, UserPatch, UserRepository};
use crate::domain::DomainError;

const USER_NOT_FOUND: &str = "User not found";

/// Directory of user records backed by a repository
pub struct UserDirectory<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserDirectory<R> {
    /// Create a new user directory
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a user under a freshly generated id
    pub async fn create(&self, input: NewUser) -> Result<User, DomainError> {
        let user = User::new(UserId::generate(), input);
        self.repository.insert(user).await
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<User, DomainError> {
        self.repository
            .get(&UserId::new(id))
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    /// Overwrite the supplied fields of a user
    pub async fn update(&self, id: &str, patch: UserPatch) -> Result<User, DomainError> {
        self.repository
            .update(&UserId::new(id), patch)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        if self.repository.delete(&UserId::new(id)).await? {
            Ok(())
        } else {
            Err(DomainError::not_found(USER_NOT_FOUND))
        }
    }

    /// Count users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Email, MockUserRepository};
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_directory() -> UserDirectory<InMemoryUserRepository> {
        UserDirectory::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn daniel() -> NewUser {
        NewUser::new("Daniel", "daniel@gmail.com").unwrap()
    }

    #[tokio::test]
    async fn test_create_user() {
        let directory = create_directory();

        let user = directory.create(daniel()).await.unwrap();

        assert!(!user.id().as_str().is_empty());
        assert_eq!(user.name(), "Daniel");
        assert_eq!(user.email().as_str(), "daniel@gmail.com");
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_user() {
        let directory = create_directory();

        let created = directory.create(daniel()).await.unwrap();
        let fetched = directory.get(created.id().as_str()).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_consecutive_creates_get_distinct_ids() {
        let directory = create_directory();

        let first = directory.create(daniel()).await.unwrap();
        let second = directory.create(daniel()).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(directory.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_empty_initially() {
        let directory = create_directory();
        assert!(directory.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_tracks_creates_and_deletes() {
        let directory = create_directory();

        let a = directory.create(daniel()).await.unwrap();
        directory.create(daniel()).await.unwrap();
        let c = directory.create(daniel()).await.unwrap();
        assert_eq!(directory.list().await.unwrap().len(), 3);

        directory.delete(a.id().as_str()).await.unwrap();
        directory.delete(c.id().as_str()).await.unwrap();
        // Failed delete does not change the count
        assert!(directory.delete(c.id().as_str()).await.is_err());

        assert_eq!(directory.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let directory = create_directory();

        let err = directory.get("non-existent-id").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Not found: User not found");
    }

    #[tokio::test]
    async fn test_update_partial_name() {
        let directory = create_directory();
        let created = directory.create(daniel()).await.unwrap();

        let updated = directory
            .update(
                created.id().as_str(),
                UserPatch::default().with_name("Benjamin"),
            )
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name(), "Benjamin");
        assert_eq!(updated.email().as_str(), "daniel@gmail.com");
    }

    #[tokio::test]
    async fn test_update_both_fields() {
        let directory = create_directory();
        let created = directory.create(daniel()).await.unwrap();

        let patch = UserPatch::default()
            .with_name("Dani Updated")
            .with_email(Email::parse("dani@new.com").unwrap());
        let updated = directory
            .update(created.id().as_str(), patch)
            .await
            .unwrap();

        assert_eq!(updated.name(), "Dani Updated");
        assert_eq!(updated.email().as_str(), "dani@new.com");
        assert_eq!(directory.get(created.id().as_str()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_empty_update_leaves_record_unchanged() {
        let directory = create_directory();
        let created = directory.create(daniel()).await.unwrap();

        let updated = directory
            .update(created.id().as_str(), UserPatch::default())
            .await
            .unwrap();

        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let directory = create_directory();

        let err = directory
            .update("non-existent-id", UserPatch::default().with_name("Zeus"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let directory = create_directory();
        let created = directory.create(daniel()).await.unwrap();

        directory.delete(created.id().as_str()).await.unwrap();

        let err = directory.get(created.id().as_str()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let directory = create_directory();

        let err = directory.delete("non-existent-id").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_assigns_generated_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|user| !user.id().as_str().is_empty() && user.name() == "Daniel")
            .times(1)
            .returning(|user| Ok(user));

        let directory = UserDirectory::new(Arc::new(repo));
        let user = directory.create(daniel()).await.unwrap();

        assert_eq!(user.email().as_str(), "daniel@gmail.com");
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Err(DomainError::internal("storage unavailable")));

        let directory = UserDirectory::new(Arc::new(repo));
        let err = directory.list().await.unwrap_err();

        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
