//! Helper functions used across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`target_url`] - Target URL validation

pub mod code_generator;
pub mod target_url;
