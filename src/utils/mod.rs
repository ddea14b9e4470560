//! # Utility Modules
//!
//! - **Constants** (`constant`) - API metadata and configuration defaults
//! - **Shutdown** (`shutdown`) - Termination signal handling for graceful shutdown
//! - **Telemetry** (`telemetry`) - Global tracing subscriber setup

pub mod constant;
pub mod shutdown;
pub mod telemetry;
