//! Init command: create a book project and its first outline.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use ketab_core::config::Config;
use ketab_core::outline::{build_outline, format_outline};
use ketab_core::project::{CHAPTERS_DIR, GUIDELINES_FILE, METADATA_FILE, NewProject, create_project};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Outline file written next to `book.json`.
pub const OUTLINE_FILE: &str = "outline.md";

/// Arguments for the `init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (created if missing).
    pub path: Utf8PathBuf,

    /// Book title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Genre, e.g. essay, novel, memoir.
    pub genre: String,

    /// Intended tone, e.g. formal, intimate.
    pub tone: String,

    /// Target length in words.
    pub target_length: u64,

    /// Short synopsis of the book.
    #[arg(long, default_value = "")]
    pub synopsis: String,

    /// Intended audience.
    #[arg(long, default_value = "")]
    pub audience: String,

    /// Project-specific guideline (repeatable; replaces the defaults).
    #[arg(long = "guideline", value_name = "TEXT")]
    pub guidelines: Vec<String>,
}

#[derive(Serialize)]
struct InitReport {
    root: String,
    title: String,
    files: Vec<String>,
    outline_sections: usize,
}

/// Create a new book project.
#[instrument(name = "cmd_init", skip_all, fields(path = %args.path))]
pub fn cmd_init(args: InitArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(title = %args.title, target = args.target_length, "executing init command");

    let input = NewProject::new(
        args.title,
        args.author,
        args.genre,
        args.tone,
        args.target_length,
    )
    .with_synopsis(args.synopsis)
    .with_audience(args.audience)
    .with_guidelines(args.guidelines);

    let project = create_project(&args.path, input)
        .with_context(|| format!("failed to create book project at {}", args.path))?;

    let sections = config.outline_sections();
    let outline = build_outline(&project, sections, config.min_chapter_words());
    let outline_path = project.root.join(OUTLINE_FILE);
    std::fs::write(&outline_path, format_outline(&outline))
        .with_context(|| format!("failed to write {outline_path}"))?;
    debug!(path = %outline_path, sections, "outline written");

    let report = InitReport {
        root: project.root.to_string(),
        title: project.title.clone(),
        files: vec![
            METADATA_FILE.to_string(),
            GUIDELINES_FILE.to_string(),
            OUTLINE_FILE.to_string(),
            format!("{CHAPTERS_DIR}/"),
        ],
        outline_sections: sections,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} \u{ab}{}\u{bb} at {}",
            "Project created:".green(),
            report.title.bold(),
            report.root.cyan()
        );
        for file in &report.files {
            println!("  {}", file.dimmed());
        }
        println!("Outline proposes {} chapters.", report.outline_sections);
    }

    Ok(())
}
