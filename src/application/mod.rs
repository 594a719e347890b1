//! # Application Layer
//!
//! Repository interfaces and the services that validate input before
//! delegating to them.

pub mod interfaces;
pub mod services;

pub use interfaces::*;
pub use services::*;
