mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_stats_reports_full_record() {
    let server = common::test_server();
    common::create_link(&server, "https://example.com", Some("promo")).await;

    let response = server.get("/api/links/promo/stats").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["slug"], "promo");
    assert_eq!(body["target"], "https://example.com");
    assert_eq!(body["clicks"], 0);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_stats_does_not_count_a_visit() {
    let server = common::test_server();
    common::create_link(&server, "https://example.com", Some("promo")).await;

    for _ in 0..5 {
        server.get("/api/links/promo/stats").await.assert_status_ok();
    }

    let response = server.get("/api/links/promo/stats").await;
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 0);
}

#[tokio::test]
async fn test_stats_unknown_slug_is_not_found() {
    let server = common::test_server();

    let response = server.get("/api/links/missing/stats").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reset_clicks_after_visits() {
    let server = common::test_server();
    let slug = common::create_link(&server, "https://example.com", None).await;

    for _ in 0..3 {
        server
            .get(&format!("/{slug}"))
            .await
            .assert_status(StatusCode::FOUND);
    }

    let reset = server
        .post(&format!("/api/links/{slug}/reset-clicks"))
        .await;
    reset.assert_status_ok();
    assert_eq!(reset.json::<serde_json::Value>()["clicks"], 0);

    let stats = server.get(&format!("/api/links/{slug}/stats")).await;
    assert_eq!(stats.json::<serde_json::Value>()["clicks"], 0);
}

#[tokio::test]
async fn test_reset_clicks_unknown_slug_is_not_found() {
    let server = common::test_server();

    let response = server.post("/api/links/missing/reset-clicks").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_counter_resumes_after_reset() {
    let server = common::test_server();
    common::create_link(&server, "https://example.com", Some("again")).await;

    server.get("/again").await.assert_status(StatusCode::FOUND);
    server.post("/api/links/again/reset-clicks").await.assert_status_ok();
    server.get("/again").await.assert_status(StatusCode::FOUND);

    let stats = server.get("/api/links/again/stats").await;
    assert_eq!(stats.json::<serde_json::Value>()["clicks"], 1);
}
