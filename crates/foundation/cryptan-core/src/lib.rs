//! # Cryptan Core
//!
//! Foundation for the Cryptan cryptanalysis toolkit.
//!
//! ```text
//! 'h' ──index_of──▶ 7 ──(7 - 10) mod 26──▶ 23 ──char_at──▶ 'X'
//!        Alphabet          math::mod26            Alphabet
//! ```
//!
//! Everything here is a total function: lookups outside the alphabet yield
//! `None` and empty inputs yield the documented neutral value.

pub mod alphabet;
pub mod math;

pub use alphabet::{Alphabet, LATIN, LATIN_CHARSET};
pub use math::{average, gcd, mod26, modulo};

/// Result type for cryptan-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at API boundaries (user supplied keys)
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}
