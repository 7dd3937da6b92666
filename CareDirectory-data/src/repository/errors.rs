use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Query execution error
    #[error("Database query error: {0}")]
    Query(#[from] sqlx::Error),

    /// Generic database error
    #[error("Database error: {0}")]
    Database(String),
}
