//! Batch command - anagrams for every token in a word list

use anagrams_adapters::tokens::FileTokenSource;
use anagrams_domain::TokenPolicy;
use anagrams_domain::usecases::{AnagramGenerator, BatchRunner, Renderer};
use anyhow::{Context, Result};
use std::path::PathBuf;

use super::EXIT_REJECTED;
use super::report::{EntryLabel, print_report};
use crate::args::BatchArgs;
use crate::config::AppConfig;

pub async fn execute(args: BatchArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;
    let max_len = config.max_len(&args.output);
    let generator = AnagramGenerator::with_policy(TokenPolicy::new(max_len));
    let renderer = Renderer::new(config.render_config(&args.output));

    tracing::info!(
        file = %args.file.display(),
        max_len = ?max_len,
        "Running batch"
    );

    let source = FileTokenSource::new(&args.file);
    let report = BatchRunner::new(source, generator)
        .run()
        .await
        .with_context(|| format!("Failed to read token list: {}", args.file.display()))?;

    print_report(&report, &renderer, EntryLabel::Line)?;

    tracing::info!(
        generated = report.generated(),
        rejected = report.rejected(),
        "Batch complete"
    );

    if report.has_rejections() {
        std::process::exit(EXIT_REJECTED);
    }

    Ok(())
}
