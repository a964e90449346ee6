//! Add-chapter command.

use camino::Utf8PathBuf;
use clap::Args;
use ketab_core::project::CHAPTERS_DIR;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::load_project;

/// Arguments for the `add-chapter` subcommand.
#[derive(Args, Debug)]
pub struct AddChapterArgs {
    /// Project directory.
    pub path: Utf8PathBuf,

    /// Chapter title.
    pub title: String,

    /// One-paragraph chapter summary.
    #[arg(long, default_value = "")]
    pub summary: String,

    /// Chapter goal (repeatable; defaults apply when omitted).
    #[arg(long = "goal", value_name = "TEXT")]
    pub goals: Vec<String>,
}

/// Append a chapter to a project and write its template.
#[instrument(name = "cmd_add_chapter", skip_all, fields(path = %args.path))]
pub fn cmd_add_chapter(args: AddChapterArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(title = %args.title, goals = args.goals.len(), "executing add-chapter command");

    let mut project = load_project(&args.path)?;
    let chapter = project.add_chapter(&args.title, &args.summary, args.goals)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&chapter)?);
    } else {
        println!(
            "{} {}/{}",
            "Chapter created:".green(),
            CHAPTERS_DIR,
            chapter.filename.cyan()
        );
    }

    Ok(())
}
