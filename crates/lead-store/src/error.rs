//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Record already exists
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },
}

/// A stage name outside the fixed pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stage: {0}")]
pub struct UnknownStage(pub String);

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
