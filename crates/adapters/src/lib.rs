//! anagrams adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `tokens_fs`: Word-list file (or stdin) token source
//! - `tokens_memory`: In-memory token source

mod tokens_fs;
mod tokens_memory;

/// Re-exports for token source adapters
pub mod tokens {
    pub use crate::tokens_fs::FileTokenSource;
    pub use crate::tokens_memory::InMemoryTokenSource;
}
