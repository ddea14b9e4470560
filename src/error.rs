//! # Centralized Error Handling
//!
//! Request-level errors are converted into HTTP responses in one place.
//! Configuration and startup failures have their own types since they never
//! reach a client.

use std::io;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors a request can end in.
///
/// Every variant maps to a status code and a `{"detail": ...}` body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,
}

/// JSON body sent with every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
        };
        debug!(%status, "Responding with error");

        let body = Json(ErrorBody {
            detail: detail.to_string(),
        });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;

/// Invalid values found while reading the configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid APP_ENV `{0}`, expected `development` or `production`")]
    InvalidEnv(String),

    #[error("invalid APP_HOST `{0}`, expected an IP address")]
    InvalidHost(String),

    #[error("invalid APP_PORT `{0}`, expected a port number")]
    InvalidPort(String),
}

/// Failures that stop the server from starting or keep it from running.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind listener: {0}")]
    Bind(#[source] io::Error),

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
