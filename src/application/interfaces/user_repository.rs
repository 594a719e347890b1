use async_trait::async_trait;

use crate::domain::{DomainError, EntityId, User};

/// User storage plus the symmetric friendship graph layered on top of it.
///
/// Every method is atomic: either the whole change is visible or, on error,
/// nothing changed.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user under a freshly allocated id. Any friend ids carried
    /// by the argument are discarded.
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Overwrites the profile fields of an existing user. The stored friend
    /// set is kept.
    async fn replace(&self, user: User) -> Result<User, DomainError>;

    async fn get(&self, id: EntityId) -> Result<User, DomainError>;

    /// Removes the user together with every friendship and like that
    /// references it.
    async fn delete(&self, id: EntityId) -> Result<User, DomainError>;

    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    async fn add_friend(&self, user_id: EntityId, friend_id: EntityId)
        -> Result<User, DomainError>;

    async fn remove_friend(
        &self,
        user_id: EntityId,
        friend_id: EntityId,
    ) -> Result<User, DomainError>;

    async fn common_friends(
        &self,
        user_id: EntityId,
        other_id: EntityId,
    ) -> Result<Vec<User>, DomainError>;

    async fn friends_of(&self, user_id: EntityId) -> Result<Vec<User>, DomainError>;
}
