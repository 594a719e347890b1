mod in_memory_film_repository;
mod in_memory_user_repository;

pub use in_memory_film_repository::*;
pub use in_memory_user_repository::*;
