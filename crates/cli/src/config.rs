//! Configuration loading and management

use anagrams_domain::usecases::{OutputFormat, RenderConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::args::OutputArgs;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Longest accepted token; 0 disables the cap
    #[serde(default = "default_max_len")]
    pub max_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_columns")]
    pub columns: usize,

    #[serde(default = "default_true")]
    pub header: bool,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_len() -> usize {
    10
}

fn default_columns() -> usize {
    1
}

fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            columns: default_columns(),
            header: default_true(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./anagrams.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("ANAGRAMS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Effective length cap: the CLI flag wins over the config file, and 0
    /// means no cap
    pub fn max_len(&self, args: &OutputArgs) -> Option<usize> {
        match args.max_len.unwrap_or(self.generator.max_len) {
            0 => None,
            n => Some(n),
        }
    }

    /// Renderer settings with CLI flags applied over the config file
    pub fn render_config(&self, args: &OutputArgs) -> RenderConfig {
        RenderConfig {
            format: if args.json {
                OutputFormat::Json
            } else {
                self.output.format
            },
            columns: args.columns.unwrap_or(self.output.columns),
            header: self.output.header && !args.no_header,
            limit: args.limit,
        }
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# anagrams configuration

[general]
log_level = "info"

[generator]
# Longest token accepted; n letters produce n! anagrams. 0 disables the cap.
max_len = 10

[output]
format = "text"  # text or json (TEXT, JSON and capitalised forms also accepted)
columns = 1
header = true
"#
        .to_string()
    }
}
