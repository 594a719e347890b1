//! In-memory storage primitives shared by the repository adapters.

mod database;
mod entity_store;
mod id_allocator;

pub use database::*;
pub use entity_store::*;
pub use id_allocator::*;
