use std::sync::Arc;

use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use care_directory_data::database::DatabaseClient;
use care_directory_data::repository::{DirectoryRepository, DirectoryRepositoryTrait};

pub mod health;
pub mod patients;
pub mod providers;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use health::health_check;
pub use patients::{filter_patients, get_patients};
pub use providers::{filter_providers, get_providers};

/// Service type for dependency injection
pub type DirectoryService = Arc<dyn DirectoryRepositoryTrait + Send + Sync>;

/// Create the live service over a connected database client
pub fn create_service(client: DatabaseClient) -> DirectoryService {
    Arc::new(DirectoryRepository::new(client))
}

/// Error response format for API
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Description of the failure
    pub error: String,
}

impl ErrorResponse {
    /// Create the uniform response body for a failed store query.
    /// The underlying driver error stays in the server log.
    pub fn query_failure() -> Self {
        Self {
            error: "database query failed".to_string(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}
