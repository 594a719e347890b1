use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, put},
    Json, Router,
};

use crate::domain::{EntityId, User};

use super::super::error::ApiError;
use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user).put(update_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .route("/users/{id}/friends", get(friends_of))
        .route(
            "/users/{id}/friends/{friend_id}",
            put(add_friend).delete(remove_friend),
        )
        .route(
            "/users/{id}/friends/common/{other_id}",
            get(common_friends),
        )
}

async fn list_users(State(container): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(container.user_service().list_users().await?))
}

async fn create_user(
    State(container): State<AppState>,
    body: Result<Json<User>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(user) = body?;
    Ok(Json(container.user_service().create_user(user).await?))
}

async fn update_user(
    State(container): State<AppState>,
    body: Result<Json<User>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(user) = body?;
    Ok(Json(container.user_service().update_user(user).await?))
}

async fn get_user(
    State(container): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = path?;
    let id = EntityId::new(id)?;
    Ok(Json(container.user_service().get_user(id).await?))
}

async fn delete_user(
    State(container): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = path?;
    let id = EntityId::new(id)?;
    Ok(Json(container.user_service().delete_user(id).await?))
}

async fn friends_of(
    State(container): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let Path(id) = path?;
    let id = EntityId::new(id)?;
    Ok(Json(container.user_service().friends_of(id).await?))
}

async fn add_friend(
    State(container): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path((id, friend_id)) = path?;
    let (id, friend_id) = (EntityId::new(id)?, EntityId::new(friend_id)?);
    Ok(Json(container.user_service().add_friend(id, friend_id).await?))
}

async fn remove_friend(
    State(container): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path((id, friend_id)) = path?;
    let (id, friend_id) = (EntityId::new(id)?, EntityId::new(friend_id)?);
    Ok(Json(
        container.user_service().remove_friend(id, friend_id).await?,
    ))
}

async fn common_friends(
    State(container): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let Path((id, other_id)) = path?;
    let (id, other_id) = (EntityId::new(id)?, EntityId::new(other_id)?);
    Ok(Json(
        container.user_service().common_friends(id, other_id).await?,
    ))
}
