#![allow(dead_code)]

use std::sync::Once;

use investcontrol::models::{ApiInfo, AppState};
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("investcontrol=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application with the default metadata and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> String {
    spawn_app_with_info(ApiInfo::default()).await
}

/// Spawns the application with custom metadata and returns its address.
pub async fn spawn_app_with_info(info: ApiInfo) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = investcontrol::app_with_state(AppState::new(info));
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}
