//! Batch use case - generate anagrams for every token a source yields

use crate::{
    model::{AnagramSet, TokenEntry},
    policy::TokenError,
    ports::{TokenSource, TokenSourceError},
    usecases::AnagramGenerator,
};

/// Result for a single token in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Token was valid and expanded
    Generated(AnagramSet),
    /// Token failed validation
    Rejected(TokenError),
}

/// A token entry paired with what happened to it
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub entry: TokenEntry,
    pub outcome: BatchOutcome,
}

/// Outcome of a whole batch, in source order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    pub fn generated(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i.outcome, BatchOutcome::Generated(_)))
            .count()
    }

    pub fn rejected(&self) -> usize {
        self.items.len() - self.generated()
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected() > 0
    }
}

/// Runs the generator over every entry of a token source
pub struct BatchRunner<S> {
    source: S,
    generator: AnagramGenerator,
}

impl<S: TokenSource> BatchRunner<S> {
    pub fn new(source: S, generator: AnagramGenerator) -> Self {
        Self { source, generator }
    }

    /// Load all entries and expand each one. A rejected token is recorded and
    /// the batch carries on; only a failing source aborts.
    pub async fn run(&self) -> Result<BatchReport, TokenSourceError> {
        let entries = self.source.load().await?;

        tracing::debug!(entries = entries.len(), "Processing token batch");

        let items = entries
            .into_iter()
            .map(|entry| {
                let outcome = match self.generator.generate(&entry.value) {
                    Ok(set) => BatchOutcome::Generated(set),
                    Err(e) => {
                        tracing::debug!(
                            line = entry.line,
                            token = %entry.value,
                            kind = e.kind(),
                            "Rejected token"
                        );
                        BatchOutcome::Rejected(e)
                    }
                };
                BatchItem { entry, outcome }
            })
            .collect();

        Ok(BatchReport { items })
    }
}
