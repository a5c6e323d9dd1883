mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_redirect_round_trip() {
    let server = common::test_server();
    let slug = common::create_link(&server, "https://example.com/page", None).await;

    let response = server.get(&format!("/{slug}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[tokio::test]
async fn test_redirect_counts_every_resolution() {
    let server = common::test_server();
    let slug = common::create_link(&server, "https://example.com", Some("counted")).await;

    for _ in 0..3 {
        server.get(&format!("/{slug}")).await.assert_status(StatusCode::FOUND);
    }

    let stats = server.get("/api/links/counted/stats").await;
    assert_eq!(stats.json::<serde_json::Value>()["clicks"], 3);
}

#[tokio::test]
async fn test_clicks_are_tracked_per_slug() {
    let server = common::test_server();
    common::create_link(&server, "https://a.com", Some("alpha")).await;
    common::create_link(&server, "https://b.com", Some("beta")).await;

    // Interleaved resolutions do not bleed between slugs.
    for _ in 0..2 {
        server.get("/alpha").await.assert_status(StatusCode::FOUND);
        server.get("/beta").await.assert_status(StatusCode::FOUND);
    }
    server.get("/alpha").await.assert_status(StatusCode::FOUND);

    let alpha = server.get("/api/links/alpha/stats").await;
    assert_eq!(alpha.json::<serde_json::Value>()["clicks"], 3);
    let beta = server.get("/api/links/beta/stats").await;
    assert_eq!(beta.json::<serde_json::Value>()["clicks"], 2);
}

#[tokio::test]
async fn test_unknown_slug_is_not_found_and_creates_nothing() {
    let server = common::test_server();

    let response = server.get("/nope42").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );

    let list = server.get("/api/links").await;
    assert_eq!(list.json::<serde_json::Value>().as_array().unwrap().len(), 0);
}
