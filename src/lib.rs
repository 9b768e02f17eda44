//! # Shortly
//!
//! A small URL shortener that maps long URLs to six-character codes, stores the
//! mapping in SQLite and counts visits on every redirect.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Link`](domain::entities::Link) entity and repository trait
//! - **Application Layer** ([`application`]) - Code allocation and link resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repository
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//!
//! ## Guarantees
//!
//! - Codes are random, unique, and never reused
//! - Submitting the same URL again returns the same code
//! - Visit counts are incremented atomically, so concurrent redirects never lose updates
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shortly.db"
//! cargo run
//!
//! curl -X POST localhost:5000/api/shorten \
//!      -H 'content-type: application/json' \
//!      -d '{"url":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CodeAllocator, LinkService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteLinkRepository;
    pub use crate::state::AppState;
}
