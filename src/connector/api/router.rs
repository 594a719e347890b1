use std::sync::Arc;

use axum::Router;

use super::container::Container;
use super::controller::{film_controller, user_controller};

/// Build the HTTP API over the container's services.
pub fn create_router(container: Arc<Container>) -> Router {
    Router::new()
        .merge(user_controller::routes())
        .merge(film_controller::routes())
        .with_state(container)
}
