//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::infrastructure::provider::ClientStatus;
use crate::state::AppState;

/// Returns backend client readiness.
///
/// # Endpoint
///
/// `GET /-/health`
///
/// # Response Codes
///
/// - **200 OK**: Store and queue clients are ready
/// - **503 Service Unavailable**: A client is still initializing or failed
///
/// Only reports construction state; it never builds a client or issues a
/// backend call.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok" },
///     "queue": { "status": "pending", "message": "Client is initializing" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store = check(state.readiness.store_status());
    let queue = check(state.readiness.queue_status());

    let all_healthy = store.status == "ok" && queue.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store, queue },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check(status: ClientStatus) -> CheckStatus {
    match status {
        ClientStatus::Ready => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        ClientStatus::Pending => CheckStatus {
            status: "pending".to_string(),
            message: Some("Client is initializing".to_string()),
        },
        ClientStatus::Failed => CheckStatus {
            status: "error".to_string(),
            message: Some("Client initialization failed".to_string()),
        },
    }
}
