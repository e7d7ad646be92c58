//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the session service and persisted in browser
//! storage.

pub mod accounts;
pub mod auth;

pub use accounts::*;
pub use auth::*;
