use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::domain::{EntityId, Film};

use super::super::error::ApiError;
use super::AppState;

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    pub count: Option<i64>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/films", get(list_films).post(create_film).put(update_film))
        .route("/films/popular", get(popular_films))
        .route("/films/{id}", get(get_film).delete(delete_film))
        .route(
            "/films/{id}/like/{user_id}",
            put(like_film).delete(unlike_film),
        )
}

async fn list_films(State(container): State<AppState>) -> Result<Json<Vec<Film>>, ApiError> {
    Ok(Json(container.film_service().list_films().await?))
}

async fn create_film(
    State(container): State<AppState>,
    body: Result<Json<Film>, JsonRejection>,
) -> Result<Json<Film>, ApiError> {
    let Json(film) = body?;
    Ok(Json(container.film_service().create_film(film).await?))
}

async fn update_film(
    State(container): State<AppState>,
    body: Result<Json<Film>, JsonRejection>,
) -> Result<Json<Film>, ApiError> {
    let Json(film) = body?;
    Ok(Json(container.film_service().update_film(film).await?))
}

async fn popular_films(
    State(container): State<AppState>,
    query: Result<Query<PopularQuery>, QueryRejection>,
) -> Result<Json<Vec<Film>>, ApiError> {
    let Query(query) = query?;
    let count = query.count.unwrap_or_else(|| container.popular_count());
    Ok(Json(container.film_service().popular(count).await?))
}

async fn get_film(
    State(container): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Film>, ApiError> {
    let Path(id) = path?;
    let id = EntityId::new(id)?;
    Ok(Json(container.film_service().get_film(id).await?))
}

async fn delete_film(
    State(container): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Film>, ApiError> {
    let Path(id) = path?;
    let id = EntityId::new(id)?;
    Ok(Json(container.film_service().delete_film(id).await?))
}

async fn like_film(
    State(container): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Json<Film>, ApiError> {
    let Path((id, user_id)) = path?;
    let (id, user_id) = (EntityId::new(id)?, EntityId::new(user_id)?);
    Ok(Json(container.film_service().like(id, user_id).await?))
}

async fn unlike_film(
    State(container): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Json<Film>, ApiError> {
    let Path((id, user_id)) = path?;
    let (id, user_id) = (EntityId::new(id)?, EntityId::new(user_id)?);
    Ok(Json(container.film_service().unlike(id, user_id).await?))
}
