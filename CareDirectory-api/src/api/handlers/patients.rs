use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, info, instrument};
use utoipa::{IntoParams, ToSchema};

use care_directory_data::models::Patient;

use super::{DirectoryService, ErrorResponse};

/// Query parameters for filtering patients
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PatientFilterParams {
    /// First name to match under exact string equality
    pub first_name: Option<String>,
}

/// List the projection of all patients
#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "All patient rows", body = [Patient]),
        (status = 500, description = "Store query failed", body = ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service))]
pub async fn get_patients(
    State(service): State<DirectoryService>,
) -> Result<impl IntoResponse, Response> {
    info!("Fetching all patients");

    match service.list_patients().await {
        Ok(patients) => Ok((StatusCode::OK, Json(patients))),
        Err(e) => {
            error!("Failed to fetch patients: {}", e);
            Err(ErrorResponse::query_failure().into_response())
        }
    }
}

/// Get full patient rows whose first name matches the parameter exactly
#[utoipa::path(
    get,
    path = "/patients/filter",
    params(
        PatientFilterParams
    ),
    responses(
        (status = 200, description = "Matching patient rows", body = [Patient]),
        (status = 500, description = "Store query failed", body = ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service))]
pub async fn filter_patients(
    State(service): State<DirectoryService>,
    Query(params): Query<PatientFilterParams>,
) -> Result<impl IntoResponse, Response> {
    info!("Filtering patients by first name");

    match service.patients_by_first_name(params.first_name.as_deref()).await {
        Ok(patients) => Ok((StatusCode::OK, Json(patients))),
        Err(e) => {
            error!("Failed to filter patients: {}", e);
            Err(ErrorResponse::query_failure().into_response())
        }
    }
}
