//! Word-list token source backed by a file or stdin

use anagrams_domain::{TokenEntry, TokenSource, TokenSourceError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Path value that selects stdin instead of a file
const STDIN_PATH: &str = "-";

/// Token source reading one token per line
///
/// Blank lines and lines starting with `#` are skipped.
pub struct FileTokenSource {
    path: PathBuf,
}

impl FileTokenSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PATH
    }

    async fn read_contents(&self) -> Result<String, TokenSourceError> {
        if self.is_stdin() {
            let mut content = String::new();
            tokio::io::stdin().read_to_string(&mut content).await?;
            return Ok(content);
        }

        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(
                TokenSourceError::NotFound(self.path.display().to_string()),
            ),
            Err(e) => Err(TokenSourceError::Io(e)),
        }
    }
}

#[async_trait]
impl TokenSource for FileTokenSource {
    async fn load(&self) -> Result<Vec<TokenEntry>, TokenSourceError> {
        let content = self.read_contents().await?;
        let entries = parse_token_list(&content);

        tracing::debug!(
            path = %self.path.display(),
            count = entries.len(),
            "Loaded token list"
        );

        Ok(entries)
    }
}

/// Parse a token list, keeping 1-based line numbers
fn parse_token_list(content: &str) -> Vec<TokenEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(TokenEntry::new(i + 1, line))
            }
        })
        .collect()
}
