mod film_service;
mod user_service;
pub mod validation;

pub use film_service::*;
pub use user_service::*;
