//! DTOs for the recent links listing.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::link::LinkResponse;

/// Query parameters for `GET /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct RecentQuery {
    /// Number of links to return (defaults to `RECENT_LINKS_LIMIT`).
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

/// Most recently created links, newest first.
#[derive(Debug, Serialize)]
pub struct RecentResponse {
    pub total: usize,
    pub items: Vec<LinkResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_bounds() {
        assert!(RecentQuery { limit: None }.validate().is_ok());
        assert!(RecentQuery { limit: Some(1) }.validate().is_ok());
        assert!(RecentQuery { limit: Some(100) }.validate().is_ok());
        assert!(RecentQuery { limit: Some(0) }.validate().is_err());
        assert!(RecentQuery { limit: Some(101) }.validate().is_err());
    }
}
