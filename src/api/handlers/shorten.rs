//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short code for a URL, creating it on first submission.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "aZ3k9Q",
///   "short_url": "http://localhost:5000/aZ3k9Q",
///   "target_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty or not `http://`/`https://`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let code = state.link_service.get_or_create(&payload.url).await?;
    let link = state.link_service.stats(&code).await?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&link.code),
        code: link.code,
        target_url: link.target_url,
    }))
}
