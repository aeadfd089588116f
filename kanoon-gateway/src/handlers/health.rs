use crate::dtos::HealthResponse;
use axum::Json;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "IKApi server is running",
        service: "kanoon-gateway",
        version: env!("CARGO_PKG_VERSION"),
    })
}
