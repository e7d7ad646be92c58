//! # Centralized Error Handling
//!
//! This module defines the crate-wide error type [`AppError`] used by the engine
//! and by the web front end. It follows the `thiserror` pattern.
//!
//! ## Error Categories
//!
//! 1. **Silent effect failures** - logged, never shown
//!    - [`Dom`](AppError::Dom) → a node could not be created, attached or animated
//!
//! 2. **Start-up failures** - logged, defaults are used instead
//!    - [`Config`](AppError::Config) → embedded configuration rejected
//!    - [`Serialization`](AppError::Serialization) → JSON could not be parsed
//!
//!    - [`PasswordHash`](AppError::PasswordHash) → a stored hash is malformed
//!
//! 3. **User-facing failures** - rendered on the sign-in form
//!    - [`InvalidInput`](AppError::InvalidInput) → credentials rejected
//!    - [`Storage`](AppError::Storage) → session could not be persisted
//!    - [`NotFound`](AppError::NotFound) → unknown section or record
//!
//! A missing container or anchor is *not* an error: generators treat it as a
//! no-op and return an empty batch.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_target(raw: &str) -> Result<u32> {
//!     raw.trim()
//!         .parse()
//!         .map_err(|_| AppError::InvalidInput(format!("'{}' is not a counter target", raw)))
//! }
//!
//! assert_eq!(parse_target(" 50 ").unwrap(), 50);
//! assert!(parse_target("fifty").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
///
/// Each variant carries a descriptive `String` for context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Embedded effects configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A DOM or Web Animations call threw.
    #[error("DOM error: {0}")]
    Dom(String),

    /// `localStorage` is unavailable or rejected a write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// User input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Argon2 hashing or hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// Internal failures collapse to a generic message so the sign-in form never
    /// shows DOM or storage details.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Storage(_) => "Your session could not be saved in this browser".to_string(),
            AppError::Config(_)
            | AppError::Dom(_)
            | AppError::Serialization(_)
            | AppError::PasswordHash(_) => {
                "Something went wrong, please try again".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_internal_details() {
        let err = AppError::Dom("appendChild threw HierarchyRequestError".to_string());
        assert_eq!(err.user_message(), "Something went wrong, please try again");

        let err = AppError::InvalidInput("Password must be at least 8 characters".to_string());
        assert_eq!(err.user_message(), "Password must be at least 8 characters");
    }

    #[test]
    fn test_display_includes_category() {
        let err = AppError::Config("starfield.count must be greater than zero".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: starfield.count must be greater than zero"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
