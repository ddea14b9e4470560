//! # InvestControl API
//!
//! Base HTTP service of the InvestControl project, used to validate the
//! infrastructure during the preparation phase.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the public endpoints
//! - [`models`] - Shared state, configuration and response types
//! - [`error`] - Centralized error types and HTTP error responses
//! - [`utils`] - Constants, logging setup and shutdown handling

pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Request, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{Span, debug, info_span};
use uuid::Uuid;

use crate::handlers::{
    docs_router, health_check, method_not_allowed, not_found, openapi_json,
    redirect_trailing_slash,
};
use crate::models::{ApiInfo, AppState};
use crate::utils::constant::{HEALTH_PATH, OPENAPI_PATH};

/// Creates an Axum router with the default API metadata.
///
/// This is a convenience function that calls [`app_with_state`] with a
/// freshly built [`AppState`].
#[inline]
pub fn app() -> Router {
    app_with_state(AppState::new(ApiInfo::default()))
}

/// Creates an Axum router with application routes and the given state.
///
/// Besides the API routes this serves the OpenAPI document, Swagger UI at
/// `/docs` and ReDoc at `/redoc`. `GET /health/` redirects to `/health`.
///
/// Every request runs inside an `http-request` span carrying its method,
/// URI and a random `request_id`.
pub fn app_with_state(state: AppState) -> Router {
    let state = Arc::new(state);

    let monitoring_routes = Router::new()
        .route(HEALTH_PATH, get(health_check))
        .route(&format!("{HEALTH_PATH}/"), get(redirect_trailing_slash));

    let docs_routes = Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .merge(docs_router(&state.openapi));

    Router::new()
        .merge(monitoring_routes)
        .merge(docs_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %Uuid::new_v4(),
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, _: &Span| {
                    debug!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "Request completed"
                    );
                }),
        )
        .with_state(state)
}
