mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortly::api::handlers::redirect_handler;

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&pool, "redir1", "https://example.com/target").await;

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/nothere").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_counts_visits() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&pool, "clickm", "https://example.com").await;

    for _ in 0..3 {
        let response = server.get("/clickm").await;
        assert_eq!(response.status_code(), 307);
    }

    assert_eq!(common::visits(&pool, "clickm").await, 3);
}
