//! Generate command - anagrams for tokens given on the command line

use anagrams_adapters::tokens::InMemoryTokenSource;
use anagrams_domain::usecases::{AnagramGenerator, BatchRunner, Renderer};
use anagrams_domain::{TokenPolicy, expected_count};
use anyhow::{Context, Result};
use std::path::PathBuf;

use super::EXIT_REJECTED;
use super::report::{EntryLabel, print_report};
use crate::args::GenerateArgs;
use crate::config::AppConfig;

pub async fn execute(args: GenerateArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let max_len = config.max_len(&args.output);
    let generator = AnagramGenerator::with_policy(TokenPolicy::new(max_len));
    let renderer = Renderer::new(config.render_config(&args.output));

    for token in &args.tokens {
        tracing::debug!(
            token = %token,
            expected = ?expected_count(token.len()),
            "Queued token"
        );
    }

    let runner = BatchRunner::new(InMemoryTokenSource::new(args.tokens), generator);
    let report = runner
        .run()
        .await
        .context("Failed to read tokens")?;

    print_report(&report, &renderer, EntryLabel::Token)?;

    if report.has_rejections() {
        std::process::exit(EXIT_REJECTED);
    }

    Ok(())
}
