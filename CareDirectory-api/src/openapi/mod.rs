use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Directory endpoints
        crate::api::handlers::patients::get_patients,
        crate::api::handlers::patients::filter_patients,
        crate::api::handlers::providers::get_providers,
        crate::api::handlers::providers::filter_providers,
    ),
    components(
        schemas(
            // Row models
            care_directory_data::models::Patient,
            care_directory_data::models::Provider,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentHealthStatus,

            // Shared handler types
            crate::api::handlers::ErrorResponse,
            crate::api::handlers::patients::PatientFilterParams,
            crate::api::handlers::providers::ProviderFilterParams,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "patients", description = "Patient directory endpoints"),
        (name = "providers", description = "Provider directory endpoints")
    ),
    info(
        title = "CareDirectory API",
        version = "0.1.0",
        description = "Read-only HTTP gateway over the patient and provider directory",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
struct ApiDoc;
