use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{health, patients, providers, DirectoryService};
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(service: DirectoryService) -> Router {
    debug!("Creating application router");

    let app = Router::new()
        .route("/patients", get(patients::get_patients))
        .route("/patients/filter", get(patients::filter_patients))
        .route("/providers", get(providers::get_providers))
        .route("/providers/filter", get(providers::filter_providers))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(service);

    debug!("API routes configured");

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    // Initialize uptime tracking for the health endpoint
    health::initialize_server_start_time();

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    // Get Swagger UI routes
    let swagger = configure_swagger_routes();

    // Merge Swagger UI with the app router
    app.merge(swagger)
}
