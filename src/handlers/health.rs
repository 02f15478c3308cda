use crate::response::ApiResponse;

/// GET /health-check
/// Simple healthcheck endpoint
pub async fn health_check() -> ApiResponse<()> {
    ApiResponse::message("Working Server 🥳")
}
