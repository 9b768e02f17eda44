//! Short code generation.
//!
//! Codes are fixed-length strings drawn uniformly from ASCII letters and digits
//! using the thread-local CSPRNG, so they cannot be predicted from earlier codes.

use rand::Rng;

/// Number of symbols in every generated code.
pub const CODE_LENGTH: usize = 6;

/// Symbols a code is drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random short code of [`CODE_LENGTH`] symbols.
///
/// Does not check for collisions; see
/// [`crate::application::services::CodeAllocator`] for that.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
