//! Error types for the user registry.

use thiserror::Error;

/// Errors that can occur during user operations.
///
/// Lookups of a missing id are not errors; they return `None` or `false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The input was malformed (blank id, blank name, email without `@`).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A user with the same identifier already exists.
    #[error("Conflicting state: {0}")]
    ConflictingState(String),
}
