use std::sync::Arc;

use chrono::Local;
use tracing::info;

use crate::application::UserRepository;
use crate::domain::{DomainError, EntityId, User};

use super::validation::validate_user;

/// Entry point for user operations: validates input, then delegates to the
/// repository.
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn create_user(&self, mut user: User) -> Result<User, DomainError> {
        validate_user(&user, Local::now().date_naive())?;
        user.default_name_to_login();

        let created = self.user_repo.insert(user).await?;
        info!(
            "Created user {} with id {:?}",
            created.login(),
            created.id().map(EntityId::get)
        );
        Ok(created)
    }

    /// Display name defaulting happens at creation only, so a blank name is
    /// kept as sent.
    pub async fn update_user(&self, user: User) -> Result<User, DomainError> {
        validate_user(&user, Local::now().date_naive())?;

        let updated = self.user_repo.replace(user).await?;
        info!("Updated user {}", updated.login());
        Ok(updated)
    }

    pub async fn get_user(&self, id: EntityId) -> Result<User, DomainError> {
        self.user_repo.get(id).await
    }

    pub async fn delete_user(&self, id: EntityId) -> Result<User, DomainError> {
        let removed = self.user_repo.delete(id).await?;
        info!("Deleted user {} ({})", id, removed.login());
        Ok(removed)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.list_all().await
    }

    pub async fn add_friend(
        &self,
        user_id: EntityId,
        friend_id: EntityId,
    ) -> Result<User, DomainError> {
        let user = self.user_repo.add_friend(user_id, friend_id).await?;
        info!("Users {} and {} are now friends", user_id, friend_id);
        Ok(user)
    }

    pub async fn remove_friend(
        &self,
        user_id: EntityId,
        friend_id: EntityId,
    ) -> Result<User, DomainError> {
        let user = self.user_repo.remove_friend(user_id, friend_id).await?;
        info!("Users {} and {} are no longer friends", user_id, friend_id);
        Ok(user)
    }

    pub async fn friends_of(&self, user_id: EntityId) -> Result<Vec<User>, DomainError> {
        self.user_repo.friends_of(user_id).await
    }

    pub async fn common_friends(
        &self,
        user_id: EntityId,
        other_id: EntityId,
    ) -> Result<Vec<User>, DomainError> {
        self.user_repo.common_friends(user_id, other_id).await
    }
}
