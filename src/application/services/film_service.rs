use std::sync::Arc;

use tracing::info;

use crate::application::FilmRepository;
use crate::domain::{DomainError, EntityId, Film};

use super::validation::validate_film;

pub struct FilmService {
    film_repo: Arc<dyn FilmRepository>,
}

impl FilmService {
    pub fn new(film_repo: Arc<dyn FilmRepository>) -> Self {
        Self { film_repo }
    }

    pub async fn create_film(&self, film: Film) -> Result<Film, DomainError> {
        validate_film(&film)?;

        let created = self.film_repo.insert(film).await?;
        info!(
            "Created film '{}' with id {:?}",
            created.name(),
            created.id().map(EntityId::get)
        );
        Ok(created)
    }

    pub async fn update_film(&self, film: Film) -> Result<Film, DomainError> {
        validate_film(&film)?;

        let updated = self.film_repo.replace(film).await?;
        info!("Updated film '{}'", updated.name());
        Ok(updated)
    }

    pub async fn get_film(&self, id: EntityId) -> Result<Film, DomainError> {
        self.film_repo.get(id).await
    }

    pub async fn delete_film(&self, id: EntityId) -> Result<Film, DomainError> {
        let removed = self.film_repo.delete(id).await?;
        info!("Deleted film {} ('{}')", id, removed.name());
        Ok(removed)
    }

    pub async fn list_films(&self) -> Result<Vec<Film>, DomainError> {
        self.film_repo.list_all().await
    }

    pub async fn like(&self, film_id: EntityId, user_id: EntityId) -> Result<Film, DomainError> {
        let film = self.film_repo.like(film_id, user_id).await?;
        info!("User {} likes film {}", user_id, film_id);
        Ok(film)
    }

    pub async fn unlike(&self, film_id: EntityId, user_id: EntityId) -> Result<Film, DomainError> {
        let film = self.film_repo.unlike(film_id, user_id).await?;
        info!("User {} no longer likes film {}", user_id, film_id);
        Ok(film)
    }

    pub async fn popular(&self, count: i64) -> Result<Vec<Film>, DomainError> {
        self.film_repo.popular(count).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::connector::InMemoryFilmRepository;

    fn film(name: &str, duration: i32) -> Film {
        Film::new(
            name,
            "adipisicing",
            NaiveDate::from_ymd_opt(1967, 3, 25).unwrap(),
            duration,
        )
    }

    #[tokio::test]
    async fn test_create_and_update_film() {
        let service = FilmService::new(Arc::new(InMemoryFilmRepository::new()));

        let created = service.create_film(film("nisi eiusmod", 100)).await.unwrap();
        let id = created.id().unwrap();
        let updated = service
            .update_film(film("Film Updated", 190).with_id(id))
            .await
            .unwrap();

        assert_eq!(updated.name(), "Film Updated");
        assert_eq!(service.get_film(id).await.unwrap().duration(), 190);
    }

    #[tokio::test]
    async fn test_invalid_film_is_rejected_before_storage() {
        let service = FilmService::new(Arc::new(InMemoryFilmRepository::new()));

        let err = service.create_film(film("", 100)).await.unwrap_err();

        assert!(err.is_invalid_input());
        assert!(service.list_films().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let service = FilmService::new(Arc::new(InMemoryFilmRepository::new()));
        let unknown = film("Name", -1).with_id(EntityId::new(9).unwrap());

        assert!(service.update_film(unknown).await.unwrap_err().is_invalid_input());
    }
}
