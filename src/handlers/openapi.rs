//! # API Description
//!
//! The OpenAPI document is generated from the `#[utoipa::path]` annotations
//! on the handlers. It is served as JSON and rendered by the Swagger UI and
//! ReDoc pages.

use std::sync::Arc;

use axum::{Json, Router, extract::State};
use tracing::{debug, instrument};
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

use crate::handlers::health_check::__path_health_check;
use crate::models::{ApiInfo, AppState, HealthResponse, HealthStatus};
use crate::utils::constant::{OPENAPI_PATH, REDOC_PATH, SWAGGER_UI_PATH};

#[derive(OpenApi)]
#[openapi(
    paths(health_check),
    components(schemas(HealthResponse, HealthStatus)),
    tags((name = "Monitoramento", description = "Monitoramento da aplicação"))
)]
pub struct ApiDoc;

/// Generates the OpenAPI document and stamps it with the given metadata.
pub fn openapi_document(info: &ApiInfo) -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();
    doc.info.title = info.title.clone();
    doc.info.version = info.version.clone();
    doc.info.description = Some(info.description.clone());
    doc
}

/// Returns the OpenAPI document prebuilt in the application state.
#[instrument(skip_all)]
pub async fn openapi_json(State(state): State<Arc<AppState>>) -> Json<OpenApiDocument> {
    debug!("OpenAPI document requested");
    Json(state.openapi.clone())
}

/// Swagger UI at `/docs` and ReDoc at `/redoc`, both reading `doc`.
///
/// Swagger UI fetches the document from `/openapi.json`; ReDoc embeds it.
pub fn docs_router<S>(doc: &OpenApiDocument) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).config(Config::from(OPENAPI_PATH)))
        .merge(Redoc::with_url(REDOC_PATH, doc.clone()))
}
