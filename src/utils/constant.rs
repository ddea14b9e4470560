//! # Application Constants
//!
//! Metadata published by the API and defaults for the runtime configuration.

use std::net::{IpAddr, Ipv4Addr};

/// Name used for the binary's log records.
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Title shown in the API description document.
pub const API_TITLE: &str = "InvestControl API";

/// API version, kept in sync with the crate version.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const API_DESCRIPTION: &str =
    "API base do InvestControl para validação de infraestrutura na fase de preparação.";

pub const HEALTH_PATH: &str = "/health";

/// Where the generated OpenAPI document is served.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Swagger UI page.
pub const SWAGGER_UI_PATH: &str = "/docs";

/// ReDoc page.
pub const REDOC_PATH: &str = "/redoc";

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub const DEFAULT_PORT: u16 = 8000;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,investcontrol=debug";
