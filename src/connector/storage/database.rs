use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Film, User};

use super::EntityStore;

/// Every table of the in-memory database.
#[derive(Debug, Default)]
pub struct Tables {
    pub users: EntityStore<User>,
    pub films: EntityStore<Film>,
}

/// Shared in-memory database.
///
/// A single store-wide lock covers both tables so that a change touching two
/// rows (both ends of a friendship, a film and the user who liked it) is
/// never observed half-applied.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn film_count(&self) -> usize {
        self.tables.read().await.films.len()
    }
}
