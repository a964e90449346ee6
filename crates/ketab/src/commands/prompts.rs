//! Prompts command: research and interview topics.

use camino::Utf8PathBuf;
use clap::Args;
use ketab_core::outline::{RESEARCH_PROMPTS, research_prompts};
use tracing::{debug, instrument};

use super::load_project;

/// Arguments for the `prompts` subcommand.
#[derive(Args, Debug)]
pub struct PromptsArgs {
    /// Project directory.
    pub path: Utf8PathBuf,
}

/// Print research prompts for a project.
#[instrument(name = "cmd_prompts", skip_all, fields(path = %args.path))]
pub fn cmd_prompts(args: PromptsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing prompts command");

    let project = load_project(&args.path)?;

    if global_json {
        let value = serde_json::json!({ "title": project.title, "prompts": RESEARCH_PROMPTS });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", research_prompts(&project));
    }
    Ok(())
}
