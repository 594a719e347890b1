pub mod container;
pub mod controller;
pub mod error;
pub mod router;

pub use container::{Container, ContainerConfig, DEFAULT_POPULAR_COUNT};
pub use controller::AppState;
pub use error::{ApiError, ErrorResponse};
pub use router::create_router;
