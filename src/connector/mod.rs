//! # Connector Layer
//!
//! Implementations of the application interfaces:
//! - Storage (in-memory tables behind one store-wide lock)
//! - Repository adapters (users and friendships, films and likes)
//! - HTTP API (axum router over the services)

pub mod adapter;
pub mod api;
pub mod storage;

pub use adapter::*;
pub use api::*;
pub use storage::*;
