//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **OpenAPI** (`openapi`) - Generated API description, Swagger UI and ReDoc
//! - **Fallback** (`fallback`) - Unknown paths and methods, trailing-slash redirect

mod fallback;
mod health_check;
mod openapi;

pub use fallback::*;
pub use health_check::*;
pub use openapi::*;
