#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;

use shorty::application::services::{LinkService, RedirectResolver, StatsService};
use shorty::domain::repositories::LinkStore;
use shorty::infrastructure::persistence::MemoryLinkStore;
use shorty::routes::router;
use shorty::state::AppState;

/// Builds the full application router over a fresh in-memory store.
pub fn test_server() -> TestServer {
    let store: Arc<dyn LinkStore> = Arc::new(MemoryLinkStore::new());

    let state = AppState::new(
        Arc::new(LinkService::new(store.clone())),
        Arc::new(RedirectResolver::new(store.clone())),
        Arc::new(StatsService::new(store)),
    );

    TestServer::new(router(state)).unwrap()
}

/// Creates a link through the API and returns its slug.
pub async fn create_link(server: &TestServer, target: &str, slug: Option<&str>) -> String {
    let body = match slug {
        Some(slug) => serde_json::json!({ "target": target, "slug": slug }),
        None => serde_json::json!({ "target": target }),
    };

    let response = server.post("/api/links").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<serde_json::Value>()["slug"]
        .as_str()
        .unwrap()
        .to_string()
}
