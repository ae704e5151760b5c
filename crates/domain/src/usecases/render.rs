//! Rendering use case - turns anagram sets into printable output

use serde::{Deserialize, Serialize};

use crate::model::AnagramSet;

/// Output format for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain text, one or more anagrams per line
    #[default]
    #[serde(alias = "Text", alias = "TEXT")]
    Text,
    /// Pretty-printed JSON
    #[serde(alias = "Json", alias = "JSON")]
    Json,
}

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Anagrams per line in text output
    pub columns: usize,
    /// Whether to print a "<token>: <count> anagrams" header in text output
    pub header: bool,
    /// Render only the first N anagrams
    pub limit: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            columns: 1,
            header: true,
            limit: None,
        }
    }
}

/// Renderer for anagram sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a single anagram set
    pub fn render(&self, set: &AnagramSet) -> Result<String, serde_json::Error> {
        match self.config.format {
            OutputFormat::Text => Ok(self.render_text(set)),
            OutputFormat::Json => serde_json::to_string_pretty(&self.to_json(set)?),
        }
    }

    /// JSON value for a set, honouring the limit; `count` stays the full size
    pub fn to_json(&self, set: &AnagramSet) -> Result<serde_json::Value, serde_json::Error> {
        let mut value = serde_json::to_value(set)?;
        if let (Some(limit), Some(anagrams)) = (
            self.config.limit,
            value.get_mut("anagrams").and_then(|a| a.as_array_mut()),
        ) {
            anagrams.truncate(limit);
        }
        Ok(value)
    }

    fn render_text(&self, set: &AnagramSet) -> String {
        let mut lines = Vec::new();

        if self.config.header {
            lines.push(format!("{}: {} anagrams", set.token(), set.len()));
        }

        let columns = self.config.columns.max(1);
        for row in self.visible(set).chunks(columns) {
            lines.push(row.join(" "));
        }

        if self.config.header && self.visible(set).len() < set.len() {
            lines.push(format!("... {} more", set.len() - self.visible(set).len()));
        }

        lines.join("\n")
    }

    fn visible<'a>(&self, set: &'a AnagramSet) -> &'a [String] {
        let anagrams = set.anagrams();
        match self.config.limit {
            Some(limit) if limit < anagrams.len() => &anagrams[..limit],
            _ => anagrams,
        }
    }
}
