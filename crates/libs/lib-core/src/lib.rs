//! # Core Library
//!
//! Target-independent engine for the portfolio site: configuration, errors,
//! session DTOs, password hashing and every visual-effect / navigation model.
//!
//! Nothing in here touches the DOM. The web crate implements
//! [`model::Container`] for real elements and drives the models from
//! `spawn_local` tasks; tests drive them with [`model::MemoryContainer`] and
//! a seeded [`fastrand::Rng`].

pub mod config;
pub mod error;
pub mod model;
pub mod dto;
pub mod pwd;

// Re-export commonly used types
pub use config::EffectsConfig;
pub use error::{AppError, Result};
pub use model::{Container, RandomSource, Section, NavigationState, StopFlag};
