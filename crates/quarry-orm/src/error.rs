//! Error types for the ORM.

use quarry_core::CompileError;
use thiserror::Error;

/// ORM-specific errors.
#[derive(Debug, Error)]
pub enum OrmError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The statement could not be compiled for the configured dialect.
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    /// No object found matching the query.
    #[error("object not found")]
    NotFound,

    /// Multiple objects found when exactly one was expected.
    #[error("multiple objects returned when one was expected")]
    MultipleObjectsReturned,

    /// Invalid field name.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// Invalid or incomplete configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for ORM operations.
pub type Result<T> = std::result::Result<T, OrmError>;
