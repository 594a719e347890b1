use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tracing::debug;

use crate::application::{FilmRepository, FilmService, UserRepository, UserService};
use crate::connector::{InMemoryDatabase, InMemoryFilmRepository, InMemoryUserRepository};

/// Default number of films returned by `/films/popular` without `count`.
pub const DEFAULT_POPULAR_COUNT: i64 = 10;

#[derive(Debug, Clone)]
pub struct ContainerConfig {
    pub port: u16,
    /// Bind to 0.0.0.0 instead of 127.0.0.1.
    pub public: bool,
    pub popular_count: i64,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            public: false,
            popular_count: DEFAULT_POPULAR_COUNT,
        }
    }
}

/// Owns the database and hands out services wired to it.
pub struct Container {
    db: Arc<InMemoryDatabase>,
    user_repo: Arc<dyn UserRepository>,
    film_repo: Arc<dyn FilmRepository>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        Self::with_database(InMemoryDatabase::shared(), config)
    }

    pub fn with_database(db: Arc<InMemoryDatabase>, config: ContainerConfig) -> Self {
        debug!("Wiring in-memory user and film repositories");
        let user_repo = Arc::new(InMemoryUserRepository::with_database(Arc::clone(&db)));
        let film_repo = Arc::new(InMemoryFilmRepository::with_database(Arc::clone(&db)));

        Self {
            db,
            user_repo,
            film_repo,
            config,
        }
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.user_repo.clone())
    }

    pub fn film_service(&self) -> FilmService {
        FilmService::new(self.film_repo.clone())
    }

    pub fn database(&self) -> Arc<InMemoryDatabase> {
        Arc::clone(&self.db)
    }

    pub fn popular_count(&self) -> i64 {
        self.config.popular_count
    }

    pub fn bind_address(&self) -> SocketAddr {
        let ip = if self.config.public {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        SocketAddr::new(ip, self.config.port)
    }
}
