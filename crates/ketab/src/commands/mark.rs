//! Mark command: set a chapter's draft status.

use camino::Utf8PathBuf;
use clap::Args;
use ketab_core::DraftStatus;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::load_project;

/// Arguments for the `mark` subcommand.
#[derive(Args, Debug)]
pub struct MarkArgs {
    /// Project directory.
    pub path: Utf8PathBuf,

    /// Chapter number (1-based).
    pub chapter: usize,

    /// New draft status.
    #[arg(value_enum)]
    pub status: DraftStatus,
}

/// Update a chapter's draft status.
#[instrument(name = "cmd_mark", skip_all, fields(path = %args.path, chapter = args.chapter))]
pub fn cmd_mark(args: MarkArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(status = %args.status, "executing mark command");

    let mut project = load_project(&args.path)?;
    let chapter = project.set_draft_status(args.chapter, args.status)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(chapter)?);
    } else {
        println!(
            "{} {} is now {}",
            "Marked:".green(),
            chapter.title.bold(),
            chapter.draft_status.as_str().cyan()
        );
    }
    Ok(())
}
