use axum::http::{Method, Uri};
use axum::response::Redirect;
use tracing::{debug, instrument};

use crate::error::{AppError, AppResult};

/// Answers requests for paths no route matches.
#[instrument(skip_all, fields(%uri))]
pub async fn not_found(uri: Uri) -> AppResult<()> {
    debug!("No route for path");
    Err(AppError::NotFound)
}

/// Answers requests whose path exists but not with this method.
#[instrument(skip_all, fields(%method, %uri))]
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppResult<()> {
    debug!("Method not supported on path");
    Err(AppError::MethodNotAllowed)
}

/// Sends `/path/` to `/path` with a `307 Temporary Redirect`, keeping the query.
#[instrument(skip_all, fields(%uri))]
pub async fn redirect_trailing_slash(uri: Uri) -> Redirect {
    let path = uri.path().trim_end_matches('/');
    let target = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    debug!(%target, "Redirecting to path without trailing slash");
    Redirect::temporary(&target)
}
