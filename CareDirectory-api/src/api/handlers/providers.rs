use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, info, instrument};
use utoipa::{IntoParams, ToSchema};

use care_directory_data::models::Provider;

use super::{DirectoryService, ErrorResponse};

/// Query parameters for filtering providers
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ProviderFilterParams {
    /// Speciality to match under exact string equality
    pub speciality: Option<String>,
}

/// List the projection of all providers
#[utoipa::path(
    get,
    path = "/providers",
    responses(
        (status = 200, description = "All provider rows", body = [Provider]),
        (status = 500, description = "Store query failed", body = ErrorResponse),
    ),
    tag = "providers"
)]
#[instrument(skip(service))]
pub async fn get_providers(
    State(service): State<DirectoryService>,
) -> Result<impl IntoResponse, Response> {
    info!("Fetching all providers");

    match service.list_providers().await {
        Ok(providers) => Ok((StatusCode::OK, Json(providers))),
        Err(e) => {
            error!("Failed to fetch providers: {}", e);
            Err(ErrorResponse::query_failure().into_response())
        }
    }
}

/// Get full provider rows whose speciality matches the parameter exactly
#[utoipa::path(
    get,
    path = "/providers/filter",
    params(
        ProviderFilterParams
    ),
    responses(
        (status = 200, description = "Matching provider rows", body = [Provider]),
        (status = 500, description = "Store query failed", body = ErrorResponse),
    ),
    tag = "providers"
)]
#[instrument(skip(service))]
pub async fn filter_providers(
    State(service): State<DirectoryService>,
    Query(params): Query<ProviderFilterParams>,
) -> Result<impl IntoResponse, Response> {
    info!("Filtering providers by speciality");

    match service.providers_by_speciality(params.speciality.as_deref()).await {
        Ok(providers) => Ok((StatusCode::OK, Json(providers))),
        Err(e) => {
            error!("Failed to filter providers: {}", e);
            Err(ErrorResponse::query_failure().into_response())
        }
    }
}
