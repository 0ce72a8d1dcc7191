//! Domain-level error types.

use thiserror::Error;

/// Field validation failures for a create request.
///
/// The `Display` text is what clients see in the `error` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Title must be a non-empty string")]
    InvalidTitle,

    #[error("Body must be a non-empty string")]
    InvalidBody,

    #[error("Invalid user_id")]
    InvalidUserId,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The store reported that no row matched.
    #[error("Entity not found")]
    NotFound,

    /// The store answered with an error of its own.
    #[error("Query execution failed: {message}")]
    Query {
        code: Option<String>,
        message: String,
    },

    /// The store could not be reached at the network level.
    #[error("Store unreachable: {0}")]
    Unreachable(String),

    /// The store answered but the payload did not match the projection.
    #[error("Unexpected store response: {0}")]
    Decode(String),
}

impl RepoError {
    pub fn query(message: impl Into<String>) -> Self {
        RepoError::Query {
            code: None,
            message: message.into(),
        }
    }
}
