//! # Health Check Handler
//!
//! Liveness probe for InvestControl deployments. Monitors and load balancers
//! poll it to confirm the process is up and serving HTTP.

use axum::Json;
use tracing::{debug, instrument};

use crate::models::HealthResponse;

/// Always answers `200 OK` with `{"status": "ok"}`. Performs no I/O.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Monitoramento",
    operation_id = "health_check_health_get",
    summary = "Health Check",
    description = "Rota de verificação de saúde para monitoramento básico da aplicação.",
    responses(
        (status = 200, description = "Successful Response", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check endpoint accessed");
    Json(HealthResponse::ok())
}
