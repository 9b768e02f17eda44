//! API route configuration.

use crate::api::handlers::{recent_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`        - Get or create the short code for a URL
/// - `GET  /stats/{code}`   - Target, visit count and creation time of a link
/// - `GET  /links`          - Most recently created links
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/links", get(recent_handler))
}
