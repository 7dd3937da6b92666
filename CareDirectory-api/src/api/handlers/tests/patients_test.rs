#[cfg(test)]
mod patients_tests {
    use std::sync::Arc;

    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use chrono::NaiveDate;
    use serde_json::Value;

    use care_directory_data::models::Patient;
    use care_directory_data::repository::tests::MockDirectoryRepository;

    use crate::api::handlers::patients::{filter_patients, get_patients, PatientFilterParams};
    use crate::api::handlers::DirectoryService;

    fn sample_patients() -> Vec<Patient> {
        vec![
            Patient {
                patients_id: 1,
                first_name: "Ana".to_string(),
                last_name: "Silva".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
            },
            Patient {
                patients_id: 2,
                first_name: "Brian".to_string(),
                last_name: "Okafor".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 11, 3).unwrap(),
            },
        ]
    }

    fn service_with(patients: Vec<Patient>) -> DirectoryService {
        Arc::new(MockDirectoryRepository::new().with_patients(patients))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_patients_returns_all_rows() {
        let service = service_with(sample_patients());

        let response = get_patients(State(service)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let rows = json.as_array().expect("body should be a JSON array");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["patients_id"], 1);
        assert_eq!(rows[0]["first_name"], "Ana");
        assert_eq!(rows[0]["date_of_birth"], "1985-04-12");
        assert_eq!(rows[1]["last_name"], "Okafor");
    }

    #[tokio::test]
    async fn test_get_patients_empty_store_returns_empty_array() {
        let service = service_with(Vec::new());

        let response = get_patients(State(service)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_get_patients_store_failure_returns_500() {
        let service: DirectoryService =
            Arc::new(MockDirectoryRepository::new().with_query_failure());

        let response = get_patients(State(service)).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert!(json.is_object());
        assert_eq!(json["error"], "database query failed");
    }

    #[tokio::test]
    async fn test_filter_patients_exact_match() {
        let service = service_with(sample_patients());
        let params = PatientFilterParams {
            first_name: Some("Ana".to_string()),
        };

        let response = filter_patients(State(service), Query(params))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["last_name"], "Silva");
    }

    #[tokio::test]
    async fn test_filter_patients_without_parameter_returns_empty_array() {
        let service = service_with(sample_patients());
        let params = PatientFilterParams { first_name: None };

        let response = filter_patients(State(service), Query(params))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_filter_patients_store_failure_returns_500() {
        let service: DirectoryService =
            Arc::new(MockDirectoryRepository::new().with_query_failure());
        let params = PatientFilterParams {
            first_name: Some("Ana".to_string()),
        };

        let response = filter_patients(State(service), Query(params))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "database query failed");
    }
}
