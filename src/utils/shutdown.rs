use tokio::signal;
use tracing::{error, info};

/// Resolves once the process is asked to stop.
///
/// Listens for Ctrl+C everywhere and for SIGTERM on Unix, which is what
/// container runtimes send before killing the process.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(?e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!(signal = "SIGINT", "Received termination signal"),
        _ = terminate => info!(signal = "SIGTERM", "Received termination signal"),
    }
}
