//! Handler for single link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link's target, visit count and creation time.
///
/// Reading stats does not count as a visit.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.stats(&code).await?;
    let short_url = state.short_url(&link.code);

    Ok(Json(LinkResponse::from_link(link, short_url)))
}
