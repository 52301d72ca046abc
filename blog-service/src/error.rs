//! Error types for the blog service.
//!
//! One taxonomy covers the whole pipeline: generation-time failures abort a
//! run all-or-nothing, read-path absence is a `NotFound` outcome rather than
//! a crash, and syndication failures are constructed only to be logged.

use thiserror::Error;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// LLM response could not be parsed into the required shape
    #[error("malformed generation output: {0}")]
    MalformedGeneration(String),

    /// No eligible entity to select from (authors, topics)
    #[error("empty pool: {0}")]
    EmptyPool(&'static str),

    /// Requested entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Uniqueness violation or exhausted slug candidates
    #[error("conflict: {0}")]
    Conflict(String),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// External generation call exceeded its deadline
    #[error("generation request timed out")]
    GenerationTimeout,

    /// Persistence layer exceeded its deadline
    #[error("persistence request timed out")]
    PersistenceTimeout,

    /// LLM transport or API failure
    #[error("generation error: {0}")]
    Generation(String),

    /// Syndication endpoint failure; logged by the notifier, never propagated
    #[error("syndication error: {0}")]
    Syndication(String),

    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => AppError::PersistenceTimeout,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(db.message().to_string())
            }
            other => AppError::Database(other),
        }
    }
}
