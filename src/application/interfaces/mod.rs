mod film_repository;
mod user_repository;

pub use film_repository::*;
pub use user_repository::*;
