use crate::app_context::AppContext;
use crate::health::responses::{HealthCheckResponse, HealthStatus};
use crate::http::tests::{test_server, test_server_with};
use crate::imagery::mapillary::MapillaryClient;
use serde_json::json;
use std::time::Duration;
use url::Url;

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        status: HealthStatus::Ok,
    });
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_check_ignores_unreachable_provider() {
    let client = MapillaryClient::new(
        Url::parse("http://127.0.0.1:9").unwrap(),
        "MLY|token",
        Duration::from_millis(50),
        10,
    )
    .expect("Failed to build Mapillary client.");
    let server = test_server_with(AppContext::with_provider(client));

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}
