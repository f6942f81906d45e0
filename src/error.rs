//! Error types surfaced by the mapper layer.

use sea_orm::DbErr;

/// Errors returned by connectors, converters and mappers.
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type Result<T> = std::result::Result<T, MapperError>;
