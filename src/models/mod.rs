mod api_info;
mod health;
mod settings;
mod state;

pub use api_info::ApiInfo;
pub use health::{HealthResponse, HealthStatus};
pub use settings::{AppEnv, Settings};
pub use state::AppState;
