use async_trait::async_trait;
use tracing::debug;

use crate::database::DatabaseClient;
use crate::models::{Patient, Provider};
use super::errors::RepositoryError;

/// Repository trait for the patient and provider directory
#[async_trait]
pub trait DirectoryRepositoryTrait {
    /// Get the list projection of every patient row
    async fn list_patients(&self) -> Result<Vec<Patient>, RepositoryError>;

    /// Get the list projection of every provider row
    async fn list_providers(&self) -> Result<Vec<Provider>, RepositoryError>;

    /// Get full patient rows whose first name equals the parameter
    async fn patients_by_first_name(
        &self,
        first_name: Option<&str>,
    ) -> Result<Vec<Patient>, RepositoryError>;

    /// Get full provider rows whose speciality equals the parameter
    async fn providers_by_speciality(
        &self,
        speciality: Option<&str>,
    ) -> Result<Vec<Provider>, RepositoryError>;

    /// Verify the store connection is alive
    async fn check_connection(&self) -> Result<(), RepositoryError>;
}

/// Repository for directory queries backed by the shared MySQL connection.
/// Each operation locks the connection for exactly one query round trip, so
/// concurrent requests serialize at the store and cannot interleave their
/// parameter bindings.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    client: DatabaseClient,
}

impl DirectoryRepository {
    /// Create a new repository over a connected client
    pub fn new(client: DatabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DirectoryRepositoryTrait for DirectoryRepository {
    async fn list_patients(&self) -> Result<Vec<Patient>, RepositoryError> {
        debug!("Listing all patients");

        let mut conn = self.client.acquire().await;
        let patients = sqlx::query_as::<_, Patient>(
            "SELECT patients_id, first_name, last_name, date_of_birth FROM patients",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(patients)
    }

    async fn list_providers(&self) -> Result<Vec<Provider>, RepositoryError> {
        debug!("Listing all providers");

        let mut conn = self.client.acquire().await;
        let providers = sqlx::query_as::<_, Provider>(
            "SELECT first_name, last_name, provider_speciality FROM providers",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(providers)
    }

    async fn patients_by_first_name(
        &self,
        first_name: Option<&str>,
    ) -> Result<Vec<Patient>, RepositoryError> {
        debug!("Filtering patients by first name: {:?}", first_name);

        // An absent value binds NULL, and `first_name = NULL` matches no rows
        let mut conn = self.client.acquire().await;
        let patients = sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE first_name = ?")
            .bind(first_name)
            .fetch_all(&mut *conn)
            .await?;

        Ok(patients)
    }

    async fn providers_by_speciality(
        &self,
        speciality: Option<&str>,
    ) -> Result<Vec<Provider>, RepositoryError> {
        debug!("Filtering providers by speciality: {:?}", speciality);

        let mut conn = self.client.acquire().await;
        let providers =
            sqlx::query_as::<_, Provider>("SELECT * FROM providers WHERE provider_speciality = ?")
                .bind(speciality)
                .fetch_all(&mut *conn)
                .await?;

        Ok(providers)
    }

    async fn check_connection(&self) -> Result<(), RepositoryError> {
        use sqlx::Connection;

        debug!("Pinging the database connection");

        let mut conn = self.client.acquire().await;
        conn.ping().await?;

        Ok(())
    }
}

/// Mock directory repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Mock implementation of DirectoryRepository for testing
    pub struct MockDirectoryRepository {
        patients: Vec<Patient>,
        providers: Vec<Provider>,
        fail_queries: bool,
    }

    impl Default for MockDirectoryRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockDirectoryRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self {
                patients: Vec::new(),
                providers: Vec::new(),
                fail_queries: false,
            }
        }

        /// Create a mock repository with predefined patient rows
        pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
            self.patients = patients;
            self
        }

        /// Create a mock repository with predefined provider rows
        pub fn with_providers(mut self, providers: Vec<Provider>) -> Self {
            self.providers = providers;
            self
        }

        /// Make every operation fail as if the connection had dropped
        pub fn with_query_failure(mut self) -> Self {
            self.fail_queries = true;
            self
        }

        fn check_failure(&self) -> Result<(), RepositoryError> {
            if self.fail_queries {
                Err(RepositoryError::Database("connection lost".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl DirectoryRepositoryTrait for MockDirectoryRepository {
        async fn list_patients(&self) -> Result<Vec<Patient>, RepositoryError> {
            self.check_failure()?;
            Ok(self.patients.clone())
        }

        async fn list_providers(&self) -> Result<Vec<Provider>, RepositoryError> {
            self.check_failure()?;
            Ok(self.providers.clone())
        }

        async fn patients_by_first_name(
            &self,
            first_name: Option<&str>,
        ) -> Result<Vec<Patient>, RepositoryError> {
            self.check_failure()?;

            // Mirror the NULL comparison: an absent parameter matches nothing
            let matched = match first_name {
                Some(name) => self
                    .patients
                    .iter()
                    .filter(|patient| patient.first_name == name)
                    .cloned()
                    .collect(),
                None => Vec::new(),
            };

            Ok(matched)
        }

        async fn providers_by_speciality(
            &self,
            speciality: Option<&str>,
        ) -> Result<Vec<Provider>, RepositoryError> {
            self.check_failure()?;

            let matched = match speciality {
                Some(speciality) => self
                    .providers
                    .iter()
                    .filter(|provider| provider.provider_speciality == speciality)
                    .cloned()
                    .collect(),
                None => Vec::new(),
            };

            Ok(matched)
        }

        async fn check_connection(&self) -> Result<(), RepositoryError> {
            self.check_failure()
        }
    }
}
