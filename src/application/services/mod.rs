//! Business logic services for the application layer.

pub mod code_allocator;
pub mod link_service;

pub use code_allocator::{BOUNDED_ATTEMPTS, CodeAllocator};
pub use link_service::{LinkService, MAX_RECENT_LIMIT};
