use investcontrol::error::StartupError;
use investcontrol::models::Settings;
use investcontrol::utils::constant::{APP_NAME, DEFAULT_LOG_FILTER};
use investcontrol::utils::shutdown::shutdown_signal;
use investcontrol::utils::telemetry::init_tracing;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    init_tracing(APP_NAME, settings.env, DEFAULT_LOG_FILTER);
    info!(env = ?settings.env, "Loaded configuration");

    let addr = settings.socket_addr();
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!(%addr, ?e, "Failed to bind listener");
        StartupError::Bind(e)
    })?;
    info!("Server starting at http://{addr}");

    let app = investcontrol::app();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("Server stopped");
    Ok(())
}
