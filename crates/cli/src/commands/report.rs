//! Shared output for generate and batch

use anagrams_domain::usecases::{BatchItem, BatchOutcome, BatchReport, OutputFormat, Renderer};
use anyhow::Result;

/// How a rejected entry is identified in text output
#[derive(Debug, Clone, Copy)]
pub enum EntryLabel {
    /// Token only (command-line arguments)
    Token,
    /// Line number and token (word lists)
    Line,
}

/// Print a batch report; anagrams go to stdout, rejections to stderr
pub fn print_report(report: &BatchReport, renderer: &Renderer, label: EntryLabel) -> Result<()> {
    if renderer.config().format == OutputFormat::Json {
        let value = report_json(report, renderer)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let mut first = true;
    for item in &report.items {
        match &item.outcome {
            BatchOutcome::Generated(set) => {
                if !first {
                    println!();
                }
                first = false;
                println!("{}", renderer.render(set)?);
            }
            BatchOutcome::Rejected(_) => eprintln!("{}", rejection_line(item, label)),
        }
    }

    Ok(())
}

/// JSON document for a whole report
pub fn report_json(
    report: &BatchReport,
    renderer: &Renderer,
) -> Result<serde_json::Value, serde_json::Error> {
    let results = report
        .items
        .iter()
        .map(|item| match &item.outcome {
            BatchOutcome::Generated(set) => {
                let mut value = renderer.to_json(set)?;
                value["line"] = serde_json::json!(item.entry.line);
                Ok(value)
            }
            BatchOutcome::Rejected(e) => Ok(serde_json::json!({
                "line": item.entry.line,
                "token": item.entry.value,
                "error": {
                    "kind": e.kind(),
                    "message": e.to_string(),
                },
            })),
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    Ok(serde_json::json!({
        "generated": report.generated(),
        "rejected": report.rejected(),
        "results": results,
    }))
}

fn rejection_line(item: &BatchItem, label: EntryLabel) -> String {
    let BatchOutcome::Rejected(e) = &item.outcome else {
        return String::new();
    };

    match label {
        EntryLabel::Token => format!("✗ '{}': {} [{}]", item.entry.value, e, e.kind()),
        EntryLabel::Line => format!(
            "✗ line {} '{}': {} [{}]",
            item.entry.line,
            item.entry.value,
            e,
            e.kind()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anagrams_domain::TokenEntry;
    use anagrams_domain::usecases::{AnagramGenerator, RenderConfig};

    fn sample_report() -> BatchReport {
        let generator = AnagramGenerator::new();
        let items = ["xy", "aab"]
            .iter()
            .enumerate()
            .map(|(i, token)| BatchItem {
                entry: TokenEntry::new(i + 1, *token),
                outcome: match generator.generate(token) {
                    Ok(set) => BatchOutcome::Generated(set),
                    Err(e) => BatchOutcome::Rejected(e),
                },
            })
            .collect();
        BatchReport { items }
    }

    #[test]
    fn test_report_json_shape() {
        let renderer = Renderer::new(RenderConfig::default());
        let value = report_json(&sample_report(), &renderer).unwrap();

        assert_eq!(value["generated"], 1);
        assert_eq!(value["rejected"], 1);
        assert_eq!(value["results"][0]["anagrams"][1], "yx");
        assert_eq!(value["results"][0]["line"], 1);
        assert_eq!(value["results"][1]["error"]["kind"], "duplicate-letter");
    }

    #[test]
    fn test_rejection_line_labels() {
        let report = sample_report();
        let item = &report.items[1];

        let by_token = rejection_line(item, EntryLabel::Token);
        assert!(by_token.starts_with("✗ 'aab'"));
        assert!(by_token.ends_with("[duplicate-letter]"));

        let by_line = rejection_line(item, EntryLabel::Line);
        assert!(by_line.starts_with("✗ line 2 'aab'"));
    }
}
