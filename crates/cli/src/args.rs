//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// anagrams: generate every anagram of a word made of distinct letters
#[derive(Parser, Debug)]
#[command(name = "anagrams")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate anagrams for one or more tokens
    Generate(GenerateArgs),

    /// Generate anagrams for every token in a word list
    Batch(BatchArgs),

    /// Configuration management
    Config(ConfigArgs),
}

/// Output options shared by generate and batch
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Anagrams per line in text output
    #[arg(long)]
    pub columns: Option<usize>,

    /// Print at most N anagrams per token
    #[arg(long)]
    pub limit: Option<usize>,

    /// Omit the "<token>: <count> anagrams" header
    #[arg(long)]
    pub no_header: bool,

    /// Reject tokens longer than N letters (0 disables the cap)
    #[arg(long)]
    pub max_len: Option<usize>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Tokens to expand (letters only, no repeated letter)
    #[arg(required = true)]
    pub tokens: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Word list, one token per line (use - for stdin)
    #[arg(long)]
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./anagrams.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
