use crate::core::state::AppState;
use crate::utils::time::current_timestamp;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
    pub wallet_provider: bool,
    pub pinning_configured: bool,
}

/// Health check handler
///
/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: current_timestamp(),
            wallet_provider: state.provider.is_some(),
            pinning_configured: state.config.pinning.credentials().is_some(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{read_json, send, MockChain};
    use axum::http::Method;

    #[tokio::test]
    async fn test_health_handler() {
        let mock = MockChain::start().await;
        let state = Arc::new(mock.app_state(false));

        let response = health_handler(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_response_has_timestamp() {
        let mock = MockChain::start().await;
        let state = Arc::new(mock.app_state(true));

        let response = send(&state, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthResponse = read_json(response).await;
        assert_eq!(health.status, "ok");
        assert!(health.timestamp > 0);
        assert!(health.wallet_provider);
        assert!(health.pinning_configured);
    }
}
