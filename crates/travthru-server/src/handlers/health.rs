use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

/// Handle GET /health.
pub(crate) async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
