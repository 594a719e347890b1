use async_trait::async_trait;

use crate::domain::{DomainError, EntityId, Film};

/// Film storage plus likes and the popularity ranking.
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Stores a new film under a freshly allocated id with an empty like set.
    async fn insert(&self, film: Film) -> Result<Film, DomainError>;

    /// Overwrites the descriptive fields of an existing film. The stored like
    /// set is kept.
    async fn replace(&self, film: Film) -> Result<Film, DomainError>;

    async fn get(&self, id: EntityId) -> Result<Film, DomainError>;

    async fn delete(&self, id: EntityId) -> Result<Film, DomainError>;

    async fn list_all(&self) -> Result<Vec<Film>, DomainError>;

    /// Records that `user_id` likes the film. Both ids must exist.
    async fn like(&self, film_id: EntityId, user_id: EntityId) -> Result<Film, DomainError>;

    async fn unlike(&self, film_id: EntityId, user_id: EntityId) -> Result<Film, DomainError>;

    /// Liked films, most liked first, at most `limit` of them. Films without
    /// likes never appear.
    async fn popular(&self, limit: i64) -> Result<Vec<Film>, DomainError>;
}
