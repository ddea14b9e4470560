mod common;

use common::spawn_app;

fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn swagger_ui_is_served() {
    let address = spawn_app().await;

    let response = reqwest::get(format!("{address}/docs"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(
        content_type(&response).starts_with("text/html"),
        "unexpected content type {}",
        content_type(&response)
    );
}

#[tokio::test]
async fn swagger_ui_points_at_openapi_document() {
    let address = spawn_app().await;

    let response = reqwest::get(format!("{address}/docs/swagger-initializer.js"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let script = response.text().await.expect("Failed to read body");
    assert!(script.contains("/openapi.json"));
}

#[tokio::test]
async fn redoc_is_served() {
    let address = spawn_app().await;

    let response = reqwest::get(format!("{address}/redoc"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));
    let page = response.text().await.expect("Failed to read body");
    assert!(page.contains("InvestControl API"));
}
