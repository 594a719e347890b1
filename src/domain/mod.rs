//! # Domain Layer
//!
//! Users, films and the identifiers that tie them together.
//! This layer is independent of storage and transport.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
