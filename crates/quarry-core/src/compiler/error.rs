//! Compilation errors.

use thiserror::Error;

/// Errors raised while turning a statement into SQL.
///
/// Compilation either returns a complete statement or one of these; partial
/// SQL is never handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The statement is malformed (join without ON, ragged INSERT rows, ...).
    #[error("malformed statement: {0}")]
    Structural(String),

    /// The target dialect cannot express the requested feature.
    #[error("{feature} is not supported by the {dialect} dialect")]
    Unsupported {
        /// Dialect name, e.g. `sqlserver`.
        dialect: &'static str,
        /// The rejected feature.
        feature: &'static str,
    },
}

/// Result type alias for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
