mod common;

use shortlink_redirect::infrastructure::provider::ClientStatus;

#[tokio::test]
async fn test_health_all_ready() {
    let app = common::create_test_app();
    let server = app.server();

    let response = server.get("/-/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["queue"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_reports_pending_queue() {
    let app = common::create_test_app_with_readiness(ClientStatus::Ready, ClientStatus::Pending);
    let server = app.server();

    let response = server.get("/-/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["queue"]["status"], "pending");
}

#[tokio::test]
async fn test_health_reports_failed_store() {
    let app = common::create_test_app_with_readiness(ClientStatus::Failed, ClientStatus::Ready);
    let server = app.server();

    let response = server.get("/-/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["store"]["status"], "error");
    assert!(json["checks"]["store"]["message"].is_string());
}

#[tokio::test]
async fn test_health_does_not_touch_store() {
    let app = common::create_test_app();
    let server = app.server();

    let _response = server.get("/-/health").await;

    assert_eq!(app.repository.lookups(), 0);
}
