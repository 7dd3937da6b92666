//! Database connection module for the CareDirectory application
//!
//! Opens a single MySQL connection from environment-provided credentials.
//! The connection lives for the whole process and is shared by every
//! request; there is no pool, retry, or reconnect.

use std::env;
use std::sync::Arc;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::ConnectOptions;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use super::DatabaseError;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database server hostname
    pub host: String,
    /// Username for authentication
    pub user: String,
    /// Password for authentication
    pub password: String,
    /// Name of the database to query
    pub database: String,
}

impl DatabaseConfig {
    /// Create a new database configuration from environment variables
    pub fn from_env() -> Result<Self, DatabaseError> {
        Ok(DatabaseConfig {
            host: require_env("DB_HOST")?,
            user: require_env("DB_USER")?,
            password: require_env("DB_PASSWORD")?,
            database: require_env("DB_NAME")?,
        })
    }

    /// Build sqlx connect options from this configuration
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

fn require_env(name: &str) -> Result<String, DatabaseError> {
    env::var(name).map_err(|_| DatabaseError::EnvVarNotFound(name.to_string()))
}

/// Handle to the single process-lifetime store connection
#[derive(Debug, Clone)]
pub struct DatabaseClient {
    conn: Arc<Mutex<MySqlConnection>>,
}

impl DatabaseClient {
    /// Connect to the database described by the configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        info!("Connecting to MySQL database '{}' on {}", config.database, config.host);

        let options = config.connect_options();
        let conn = options.connect().await?;

        info!("Connected to the database");

        Ok(DatabaseClient {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Lock the shared connection for a single query round trip
    pub async fn acquire(&self) -> MutexGuard<'_, MySqlConnection> {
        self.conn.lock().await
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_database_config_from_env() {
        for name in ["DB_HOST", "DB_USER", "DB_PASSWORD", "DB_NAME"] {
            env::remove_var(name);
        }

        let err = DatabaseConfig::from_env().unwrap_err();
        assert!(matches!(err, DatabaseError::EnvVarNotFound(ref name) if name == "DB_HOST"));

        env::set_var("DB_HOST", "localhost");
        env::set_var("DB_USER", "root");
        env::set_var("DB_PASSWORD", "secret");
        env::set_var("DB_NAME", "care_directory");

        let config = DatabaseConfig::from_env().expect("configuration should load");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.user, "root");
        assert_eq!(config.password, "secret");
        assert_eq!(config.database, "care_directory");

        env::remove_var("DB_PASSWORD");
        let err = DatabaseConfig::from_env().unwrap_err();
        assert!(matches!(err, DatabaseError::EnvVarNotFound(ref name) if name == "DB_PASSWORD"));
    }
}
