use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::FilmRepository;
use crate::connector::storage::InMemoryDatabase;
use crate::domain::{DomainError, EntityId, Film};

/// Film table, likes and popularity ranking backed by `InMemoryDatabase`.
///
/// Likes are validated against the user table of the same database.
pub struct InMemoryFilmRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryFilmRepository {
    pub fn new() -> Self {
        Self {
            db: InMemoryDatabase::shared(),
        }
    }

    pub fn with_database(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }

    pub fn shared_database(&self) -> Arc<InMemoryDatabase> {
        Arc::clone(&self.db)
    }
}

impl Default for InMemoryFilmRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn insert(&self, mut film: Film) -> Result<Film, DomainError> {
        film.take_likes();
        let mut tables = self.db.write().await;
        let stored = tables.films.insert(film);
        debug!(
            "Stored film '{}' with id {:?}",
            stored.name(),
            stored.id().map(EntityId::get)
        );
        Ok(stored)
    }

    async fn replace(&self, mut film: Film) -> Result<Film, DomainError> {
        let id = film
            .id()
            .ok_or_else(|| DomainError::invalid_reference("Film id is not specified"))?;
        let mut tables = self.db.write().await;
        let existing = tables.films.get_mut(id)?;
        *film.likes_mut() = existing.take_likes();
        let stored = tables.films.replace(film)?;
        debug!("Replaced film {}", id);
        Ok(stored)
    }

    async fn get(&self, id: EntityId) -> Result<Film, DomainError> {
        let tables = self.db.read().await;
        let film = tables.films.get(id)?;
        Ok(film.clone())
    }

    async fn delete(&self, id: EntityId) -> Result<Film, DomainError> {
        let mut tables = self.db.write().await;
        let removed = tables.films.delete(id)?;
        debug!("Deleted film {} ({} likes)", id, removed.like_count());
        Ok(removed)
    }

    async fn list_all(&self) -> Result<Vec<Film>, DomainError> {
        let tables = self.db.read().await;
        Ok(tables.films.list_all())
    }

    async fn like(&self, film_id: EntityId, user_id: EntityId) -> Result<Film, DomainError> {
        let mut tables = self.db.write().await;
        tables.films.ensure_exists(film_id)?;
        tables.users.ensure_exists(user_id)?;

        let film = tables.films.get_mut(film_id)?;
        if film.likes_mut().insert(user_id) {
            debug!("User {} liked film {}", user_id, film_id);
        }
        Ok(film.clone())
    }

    async fn unlike(&self, film_id: EntityId, user_id: EntityId) -> Result<Film, DomainError> {
        let mut tables = self.db.write().await;
        tables.films.ensure_exists(film_id)?;
        tables.users.ensure_exists(user_id)?;

        let film = tables.films.get_mut(film_id)?;
        if film.likes_mut().remove(&user_id) {
            debug!("User {} unliked film {}", user_id, film_id);
        }
        Ok(film.clone())
    }

    async fn popular(&self, limit: i64) -> Result<Vec<Film>, DomainError> {
        if limit <= 0 {
            return Ok(Vec::new());
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        let tables = self.db.read().await;
        let mut liked: Vec<&Film> = tables
            .films
            .iter()
            .filter(|film| film.like_count() > 0)
            .collect();

        // Most liked first; ties by ascending id
        liked.sort_by(|a, b| {
            b.like_count()
                .cmp(&a.like_count())
                .then_with(|| a.id().cmp(&b.id()))
        });

        Ok(liked.into_iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::application::UserRepository;
    use crate::connector::InMemoryUserRepository;
    use crate::domain::{EntityKind, Genre, MpaRating, User};

    struct Fixture {
        users: InMemoryUserRepository,
        films: InMemoryFilmRepository,
    }

    fn id(raw: i64) -> EntityId {
        EntityId::new(raw).unwrap()
    }

    fn film(name: &str) -> Film {
        Film::new(
            name,
            "description",
            NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
            136,
        )
    }

    async fn fixture(users: u32, films: u32) -> Fixture {
        let db = InMemoryDatabase::shared();
        let fixture = Fixture {
            users: InMemoryUserRepository::with_database(Arc::clone(&db)),
            films: InMemoryFilmRepository::with_database(db),
        };
        for n in 1..=users {
            fixture
                .users
                .insert(User::new(
                    format!("u{}@ya.ru", n),
                    format!("u{}", n),
                    "",
                    NaiveDate::from_ymd_opt(1985, 6, 1).unwrap(),
                ))
                .await
                .unwrap();
        }
        for n in 1..=films {
            fixture.films.insert(film(&format!("F{}", n))).await.unwrap();
        }
        fixture
    }

    fn names(films: &[Film]) -> Vec<String> {
        films.iter().map(|f| f.name().to_string()).collect()
    }

    #[tokio::test]
    async fn test_like_requires_existing_film_and_user() {
        let fx = fixture(1, 1).await;

        let missing_film = fx.films.like(id(5), id(1)).await.unwrap_err();
        let missing_user = fx.films.like(id(1), id(5)).await.unwrap_err();

        assert_eq!(missing_film, DomainError::not_found(EntityKind::Film, id(5)));
        assert_eq!(missing_user, DomainError::not_found(EntityKind::User, id(5)));
        assert!(fx.films.get(id(1)).await.unwrap().likes().is_empty());
    }

    #[tokio::test]
    async fn test_like_is_idempotent() {
        let fx = fixture(1, 1).await;

        fx.films.like(id(1), id(1)).await.unwrap();
        let film = fx.films.like(id(1), id(1)).await.unwrap();

        assert_eq!(film.like_count(), 1);
        assert!(film.is_liked_by(id(1)));
    }

    #[tokio::test]
    async fn test_like_then_unlike_restores_like_set() {
        let fx = fixture(2, 1).await;
        fx.films.like(id(1), id(2)).await.unwrap();
        let before = fx.films.get(id(1)).await.unwrap().likes().clone();

        fx.films.like(id(1), id(1)).await.unwrap();
        let after = fx.films.unlike(id(1), id(1)).await.unwrap();

        assert_eq!(after.likes(), &before);
    }

    #[tokio::test]
    async fn test_unlike_absent_like_is_noop() {
        let fx = fixture(1, 1).await;

        let film = fx.films.unlike(id(1), id(1)).await.unwrap();

        assert!(film.likes().is_empty());
        assert!(fx.films.unlike(id(1), id(3)).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_unlike_requires_existing_film() {
        let fx = fixture(1, 1).await;
        fx.films.like(id(1), id(1)).await.unwrap();

        let err = fx.films.unlike(id(4), id(1)).await.unwrap_err();

        assert_eq!(err, DomainError::not_found(EntityKind::Film, id(4)));
        assert!(fx.films.get(id(1)).await.unwrap().is_liked_by(id(1)));
    }

    #[tokio::test]
    async fn test_popular_orders_by_like_count() {
        let fx = fixture(3, 3).await;
        for (f, u) in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (3, 1)] {
            fx.films.like(id(f), id(u)).await.unwrap();
        }

        let all = fx.films.popular(1000).await.unwrap();
        let top_two = fx.films.popular(2).await.unwrap();

        assert_eq!(names(&all), vec!["F1", "F2", "F3"]);
        assert_eq!(names(&top_two), vec!["F1", "F2"]);
    }

    #[tokio::test]
    async fn test_popular_skips_unliked_films() {
        let fx = fixture(1, 3).await;
        fx.films.like(id(2), id(1)).await.unwrap();

        let popular = fx.films.popular(10).await.unwrap();

        assert_eq!(names(&popular), vec!["F2"]);
    }

    #[tokio::test]
    async fn test_popular_breaks_ties_by_id() {
        let fx = fixture(1, 3).await;
        fx.films.like(id(3), id(1)).await.unwrap();
        fx.films.like(id(1), id(1)).await.unwrap();

        let popular = fx.films.popular(10).await.unwrap();

        assert_eq!(names(&popular), vec!["F1", "F3"]);
    }

    #[tokio::test]
    async fn test_popular_non_positive_limit_is_empty() {
        let fx = fixture(1, 1).await;
        fx.films.like(id(1), id(1)).await.unwrap();

        assert!(fx.films.popular(0).await.unwrap().is_empty());
        assert!(fx.films.popular(-4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_keeps_likes() {
        let fx = fixture(1, 1).await;
        fx.films.like(id(1), id(1)).await.unwrap();

        let updated = fx
            .films
            .replace(film("Renamed").with_id(id(1)))
            .await
            .unwrap();

        assert_eq!(updated.name(), "Renamed");
        assert!(updated.is_liked_by(id(1)));
    }

    #[tokio::test]
    async fn test_classification_is_stored_verbatim() {
        let fx = fixture(0, 0).await;
        let genres = vec![Genre::new(1, "Comedy"), Genre::new(6, "Action")];

        let stored = fx
            .films
            .insert(
                film("Matrix")
                    .with_mpa(MpaRating::new(4, "R"))
                    .with_genres(genres.clone()),
            )
            .await
            .unwrap();

        assert_eq!(stored.genres(), genres.as_slice());
        assert_eq!(fx.films.get(id(1)).await.unwrap().mpa(), Some(&MpaRating::new(4, "R")));
        assert_eq!(fx.films.shared_database().film_count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_film() {
        let fx = fixture(0, 2).await;

        let removed = fx.films.delete(id(1)).await.unwrap();

        assert_eq!(removed.name(), "F1");
        assert_eq!(names(&fx.films.list_all().await.unwrap()), vec!["F2"]);
        assert!(fx.films.get(id(1)).await.unwrap_err().is_not_found());
    }
}
