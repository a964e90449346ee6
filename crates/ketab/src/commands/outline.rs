//! Outline command.

use camino::Utf8PathBuf;
use clap::Args;
use ketab_core::config::Config;
use ketab_core::outline::{build_outline, format_outline};
use tracing::{debug, instrument};

use super::load_project;

/// Arguments for the `outline` subcommand.
#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Project directory.
    pub path: Utf8PathBuf,

    /// Number of chapters to propose (overrides config).
    #[arg(long)]
    pub sections: Option<usize>,
}

/// Print a proposed outline for a project.
#[instrument(name = "cmd_outline", skip_all, fields(path = %args.path))]
pub fn cmd_outline(args: OutlineArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let sections = args.sections.unwrap_or_else(|| config.outline_sections());
    debug!(sections, "executing outline command");

    let project = load_project(&args.path)?;
    let outline = build_outline(&project, sections, config.min_chapter_words());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
    } else {
        print!("{}", format_outline(&outline));
    }

    Ok(())
}
