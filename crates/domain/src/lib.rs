//! anagrams domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Validated tokens and generated anagram sets
//! - `policy`: Token validation rules and their error taxonomy
//! - `ports`: Trait definitions for token sources (adapters)
//! - `usecases`: Anagram generation, batch processing and rendering

pub mod model;
pub mod policy;
pub mod ports;
pub mod usecases;

pub use model::*;
pub use policy::{TokenError, TokenPolicy};
pub use ports::*;
pub use usecases::AnagramGenerator;

/// Number of permutations of `len` distinct items (`len!`)
///
/// Returns `None` when the result does not fit in a `u64` (`len > 20`).
pub fn expected_count(len: usize) -> Option<u64> {
    (1..=len as u64).try_fold(1u64, |acc, n| acc.checked_mul(n))
}
