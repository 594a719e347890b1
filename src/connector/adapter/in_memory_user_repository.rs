use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::UserRepository;
use crate::connector::storage::{EntityStore, InMemoryDatabase};
use crate::domain::{DomainError, EntityId, User};

/// User table and friendship graph backed by `InMemoryDatabase`.
///
/// Both ends of a friendship are checked before either friend set changes,
/// and both are changed under one write lock.
pub struct InMemoryUserRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            db: InMemoryDatabase::shared(),
        }
    }

    /// Create an adapter over an existing database, typically the one the
    /// film repository uses as well.
    pub fn with_database(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }

    pub fn shared_database(&self) -> Arc<InMemoryDatabase> {
        Arc::clone(&self.db)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(users: &EntityStore<User>, ids: impl IntoIterator<Item = EntityId>) -> Vec<User> {
    ids.into_iter()
        .filter_map(|id| users.get(id).ok().cloned())
        .collect()
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, mut user: User) -> Result<User, DomainError> {
        user.take_friends();
        let mut tables = self.db.write().await;
        let stored = tables.users.insert(user);
        debug!(
            "Stored user {} with id {:?}",
            stored.login(),
            stored.id().map(EntityId::get)
        );
        Ok(stored)
    }

    async fn replace(&self, mut user: User) -> Result<User, DomainError> {
        let id = user
            .id()
            .ok_or_else(|| DomainError::invalid_reference("User id is not specified"))?;
        let mut tables = self.db.write().await;
        let existing = tables.users.get_mut(id)?;
        *user.friends_mut() = existing.take_friends();
        let stored = tables.users.replace(user)?;
        debug!("Replaced user {}", id);
        Ok(stored)
    }

    async fn get(&self, id: EntityId) -> Result<User, DomainError> {
        let tables = self.db.read().await;
        let user = tables.users.get(id)?;
        Ok(user.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<User, DomainError> {
        let mut tables = self.db.write().await;
        let removed = tables.users.delete(id)?;

        for friend_id in removed.friends() {
            if let Ok(friend) = tables.users.get_mut(*friend_id) {
                friend.friends_mut().remove(&id);
            }
        }
        let mut unliked = 0;
        for film in tables.films.iter_mut() {
            if film.likes_mut().remove(&id) {
                unliked += 1;
            }
        }

        debug!(
            "Deleted user {} ({} friendships, {} likes dropped)",
            id,
            removed.friend_count(),
            unliked
        );
        Ok(removed)
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let tables = self.db.read().await;
        Ok(tables.users.list_all())
    }

    async fn add_friend(
        &self,
        user_id: EntityId,
        friend_id: EntityId,
    ) -> Result<User, DomainError> {
        if user_id == friend_id {
            return Err(DomainError::invalid_reference(format!(
                "User {} cannot befriend themselves",
                user_id
            )));
        }

        let mut tables = self.db.write().await;
        tables.users.ensure_exists(user_id)?;
        tables.users.ensure_exists(friend_id)?;

        tables.users.get_mut(friend_id)?.friends_mut().insert(user_id);
        let user = tables.users.get_mut(user_id)?;
        user.friends_mut().insert(friend_id);

        debug!("Linked friends {} <-> {}", user_id, friend_id);
        Ok(user.clone())
    }

    async fn remove_friend(
        &self,
        user_id: EntityId,
        friend_id: EntityId,
    ) -> Result<User, DomainError> {
        let mut tables = self.db.write().await;
        tables.users.ensure_exists(friend_id)?;
        let user = tables.users.get(user_id)?;

        if !user.is_friend(friend_id) {
            return Ok(user.clone());
        }

        tables.users.get_mut(friend_id)?.friends_mut().remove(&user_id);
        let user = tables.users.get_mut(user_id)?;
        user.friends_mut().remove(&friend_id);

        debug!("Unlinked friends {} <-> {}", user_id, friend_id);
        Ok(user.clone())
    }

    async fn common_friends(
        &self,
        user_id: EntityId,
        other_id: EntityId,
    ) -> Result<Vec<User>, DomainError> {
        let tables = self.db.read().await;
        let user = tables.users.get(user_id)?;
        let other = tables.users.get(other_id)?;

        let shared = user.friends().intersection(other.friends()).copied();
        Ok(resolve(&tables.users, shared))
    }

    async fn friends_of(&self, user_id: EntityId) -> Result<Vec<User>, DomainError> {
        let tables = self.db.read().await;
        let user = tables.users.get(user_id)?;
        Ok(resolve(&tables.users, user.friends().iter().copied()))
    }
}
