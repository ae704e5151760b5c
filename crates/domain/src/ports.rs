//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to supply tokens from real inputs.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::TokenEntry;

/// Error type for token source operations
#[derive(Debug, Error)]
pub enum TokenSourceError {
    #[error("Token source not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for reading the tokens to process
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Load every token entry, in source order
    async fn load(&self) -> Result<Vec<TokenEntry>, TokenSourceError>;
}
