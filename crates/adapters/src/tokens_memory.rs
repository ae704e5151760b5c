//! In-memory token source

use anagrams_domain::{TokenEntry, TokenSource, TokenSourceError};
use async_trait::async_trait;

/// Token source over a fixed list, e.g. tokens given on the command line
///
/// Values are passed through untouched; validation happens in the domain.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenSource {
    tokens: Vec<String>,
}

impl InMemoryTokenSource {
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl TokenSource for InMemoryTokenSource {
    async fn load(&self) -> Result<Vec<TokenEntry>, TokenSourceError> {
        Ok(self
            .tokens
            .iter()
            .enumerate()
            .map(|(i, token)| TokenEntry::new(i + 1, token.as_str()))
            .collect())
    }
}
