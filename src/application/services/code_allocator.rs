//! Collision-free short code allocation.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use tracing::{debug, warn};

/// Number of draws attempted before switching to the unbounded retry loop.
pub const BOUNDED_ATTEMPTS: usize = 30;

/// Produces short codes that are not used by any stored link.
///
/// # Algorithm
///
/// 1. Up to [`BOUNDED_ATTEMPTS`] independent random draws, each checked against
///    the store. This is the path virtually every call takes.
/// 2. If every bounded draw collided, keep drawing until a free code turns up.
///    Exhausting 62^6 codes is not treated as a reportable condition.
///
/// The existence check and the later insert are not atomic, so a returned code
/// can still be taken by a concurrent writer. The store's unique constraint
/// catches that and [`super::LinkService`] retries.
pub struct CodeAllocator<L: LinkRepository> {
    link_repository: Arc<L>,
    generate: fn() -> String,
}

impl<L: LinkRepository> CodeAllocator<L> {
    /// Creates an allocator drawing codes from [`generate_code`].
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_generator(link_repository, generate_code)
    }

    /// Creates an allocator with a custom code source.
    pub fn with_generator(link_repository: Arc<L>, generate: fn() -> String) -> Self {
        Self {
            link_repository,
            generate,
        }
    }

    /// Returns a code that was free at the time of the check.
    ///
    /// # Errors
    ///
    /// Only propagates errors from the store's existence check.
    pub async fn allocate(&self) -> Result<String, AppError> {
        for attempt in 1..=BOUNDED_ATTEMPTS {
            let code = (self.generate)();
            if self.is_free(&code).await? {
                return Ok(code);
            }
            debug!(attempt, code = %code, "Short code collision");
        }

        warn!(
            attempts = BOUNDED_ATTEMPTS,
            "Bounded code allocation exhausted, retrying until a free code is found"
        );

        loop {
            let code = (self.generate)();
            if self.is_free(&code).await? {
                return Ok(code);
            }
        }
    }

    async fn is_free(&self, code: &str) -> Result<bool, AppError> {
        let taken = self.link_repository.find_by_code(code).await?.is_some();
        if taken {
            metrics::counter!("code_collisions_total").increment(1);
        }
        Ok(!taken)
    }
}
