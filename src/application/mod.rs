//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations the HTTP
//! handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Get-or-create, resolve, stats and recent links
//! - [`services::code_allocator::CodeAllocator`] - Collision-free short code allocation

pub mod services;
