pub mod handlers;
pub mod routes;

use axum::Router;

use handlers::DirectoryService;

/// Create the application router over the given directory service
pub fn create_application(service: DirectoryService) -> Router {
    routes::create_app(service)
}
