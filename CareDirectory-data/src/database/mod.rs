use thiserror::Error;

// Database modules
pub mod connection;

// Re-export database connection types
pub use connection::*;

/// Database error enum
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// Connection error
    #[error("Failed to connect to database: {0}")]
    Connection(#[from] sqlx::Error),
}
