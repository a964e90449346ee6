//! Analyze command: text metrics and typography alerts for one file.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use ketab_core::analysis::{TextMetrics, analyze, format_report};
use ketab_core::markdown;
use tracing::{debug, instrument};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Strip markdown to prose before analyzing.
    #[arg(long)]
    pub prose: bool,

    /// Fail when the text has long sentences, repeated whitespace or
    /// typography alerts.
    #[arg(long)]
    pub strict: bool,
}

/// Analyze a text file and print its report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_strict: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(prose = args.prose, strict = args.strict, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let text = if args.prose {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    let metrics = analyze(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        print!("{}", format_report(&metrics));
    }

    if (args.strict || config_strict) && metrics.has_warnings() {
        bail!("{} has {}", args.file, warning_summary(&metrics));
    }

    Ok(())
}

/// Describe which warnings a report carries.
fn warning_summary(metrics: &TextMetrics) -> String {
    let mut parts = Vec::new();
    if !metrics.long_sentences.is_empty() {
        parts.push(format!("{} long sentences", metrics.long_sentences.len()));
    }
    if metrics.spacing_issues().next().is_some() {
        parts.push("repeated whitespace".to_string());
    }
    if !metrics.typography_alerts.is_empty() {
        parts.push(format!(
            "{} typography alerts",
            metrics.typography_alerts.len()
        ));
    }
    parts.join(" and ")
}
