pub mod film_controller;
pub mod user_controller;

use std::sync::Arc;

use super::Container;

/// State shared by every handler.
pub type AppState = Arc<Container>;
