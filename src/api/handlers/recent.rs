//! Handler for the recent links listing.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::link::LinkResponse;
use crate::api::dto::recent::{RecentQuery, RecentResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recently created links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Query Parameters
///
/// - `limit` (optional): Number of links, 1 to 100 (default: `RECENT_LINKS_LIMIT`)
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is out of range.
pub async fn recent_handler(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> Result<Json<RecentResponse>, AppError> {
    params.validate()?;

    let limit = params.limit.unwrap_or(state.config.recent_links_limit);
    let links = state.link_service.list_recent(limit).await?;

    let items: Vec<LinkResponse> = links
        .into_iter()
        .map(|link| {
            let short_url = state.short_url(&link.code);
            LinkResponse::from_link(link, short_url)
        })
        .collect();

    Ok(Json(RecentResponse {
        total: items.len(),
        items,
    }))
}
