use tracing::{debug, info};
use utoipa::openapi::OpenApi;

use crate::handlers::openapi_document;
use crate::models::ApiInfo;

/// Application state shared across requests. Read-only after construction.
pub struct AppState {
    /// OpenAPI document served at `/openapi.json` and rendered by the docs pages.
    pub openapi: OpenApi,
}

impl AppState {
    /// Creates the application state, generating the OpenAPI document from `info`.
    pub fn new(info: ApiInfo) -> Self {
        info!(title = %info.title, version = %info.version, "Initializing application state");

        let openapi = openapi_document(&info);
        debug!(paths = openapi.paths.paths.len(), "Built OpenAPI document");

        Self { openapi }
    }
}
