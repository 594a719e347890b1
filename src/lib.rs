pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{FilmRepository, FilmService, UserRepository, UserService};

pub use cli::Commands;

pub use connector::{
    create_router, ApiError, Container, ContainerConfig, EntityStore, IdAllocator,
    InMemoryDatabase, InMemoryFilmRepository, InMemoryUserRepository,
};

pub use domain::{DomainError, Entity, EntityId, EntityKind, Film, Genre, MpaRating, User};
