mod common;

use investcontrol::models::{HealthResponse, HealthStatus};
use serde_json::{Value, json};

use common::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/health"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn health_check_deserializes_into_typed_response() {
    let address = spawn_app().await;

    let health: HealthResponse = reqwest::get(format!("{address}/health"))
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(health.status, HealthStatus::Ok);
    assert_eq!(health, HealthResponse::ok());
}

#[tokio::test]
async fn health_check_ignores_query_parameters() {
    let address = spawn_app().await;

    let response = reqwest::get(format!("{address}/health?verbose=true"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn health_check_is_stable_under_concurrent_requests() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let requests = (0..20).map(|_| {
        let client = client.clone();
        let url = format!("{address}/health");
        tokio::spawn(async move {
            let response = client.get(url).send().await.expect("Failed to execute request");
            let status = response.status();
            let body: Value = response.json().await.expect("Failed to parse response");
            (status, body)
        })
    });

    for handle in requests.collect::<Vec<_>>() {
        let (status, body) = handle.await.expect("Request task panicked");
        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
