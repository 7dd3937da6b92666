#[cfg(test)]
mod health_tests {
    use std::sync::Arc;

    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde_json::Value;

    use care_directory_data::repository::tests::MockDirectoryRepository;

    use crate::api::handlers::health::{health_check, initialize_server_start_time};
    use crate::api::handlers::DirectoryService;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_reports_ok() {
        initialize_server_start_time();

        let service: DirectoryService = Arc::new(MockDirectoryRepository::new());

        let response = health_check(State(service)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["database"]["status"], "ok");
        assert!(json["version"].is_string());
        assert!(json["uptime"].is_u64());
    }

    #[tokio::test]
    async fn test_health_check_degraded_when_store_unreachable() {
        initialize_server_start_time();

        let service: DirectoryService =
            Arc::new(MockDirectoryRepository::new().with_query_failure());

        let response = health_check(State(service)).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["database"]["status"], "error");
        assert_eq!(json["database"]["message"], "Database connection failed");
    }
}
