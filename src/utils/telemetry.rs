//! # Logging Setup
//!
//! Installs the global `tracing` subscriber. Development builds get readable
//! terminal output, production gets one bunyan JSON record per line.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::models::AppEnv;

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Panics if a global
/// subscriber is already set, so call it once from `main`.
pub fn init_tracing(name: &str, env: AppEnv, default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(filter);

    match env {
        AppEnv::Production => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(name.to_string(), std::io::stdout))
            .init(),
        AppEnv::Development => registry.with(fmt::layer()).init(),
    }
}
