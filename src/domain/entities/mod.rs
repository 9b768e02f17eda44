//! Core domain entities.
//!
//! - [`Link`] - A stored short code to target URL mapping with its visit count
//! - [`NewLink`] - Input for inserting a new record

pub mod link;

pub use link::{Link, NewLink};
