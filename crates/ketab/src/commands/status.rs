//! Status command: drafted words per chapter against the target.

use camino::Utf8PathBuf;
use clap::Args;
use ketab_core::DraftStatus;
use ketab_core::progress::project_progress;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::load_project;

/// Arguments for the `status` subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Project directory.
    pub path: Utf8PathBuf,
}

/// Print chapter progress for a project.
#[instrument(name = "cmd_status", skip_all, fields(path = %args.path))]
pub fn cmd_status(
    args: StatusArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing status command");

    let project = load_project(&args.path)?;
    let progress = project_progress(&project, max_input_bytes)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
        return Ok(());
    }

    println!("{}", progress.title.bold());
    if progress.chapters.is_empty() {
        println!("  {}", "no chapters yet".dimmed());
    }
    for chapter in &progress.chapters {
        let status = chapter.draft_status.as_str();
        let status = match chapter.draft_status {
            DraftStatus::Done => status.green().to_string(),
            DraftStatus::NotStarted => status.dimmed().to_string(),
            _ => status.yellow().to_string(),
        };
        let words = if chapter.missing {
            "missing".red().to_string()
        } else {
            format!("{} words", chapter.words)
        };
        println!(
            "  {:>2}. {}  [{}]  {}",
            chapter.number, chapter.title, status, words
        );
    }
    println!(
        "{} {} / {} words ({:.1}%)",
        "Total:".cyan(),
        progress.drafted_words,
        progress.target_length_words,
        progress.percent_of_target
    );

    Ok(())
}
