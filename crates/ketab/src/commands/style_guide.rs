//! Style-guide command.

use clap::Args;
use ketab_core::outline::style_guide;
use tracing::{debug, instrument};

/// Arguments for the `style-guide` subcommand.
#[derive(Args, Debug, Default)]
pub struct StyleGuideArgs {
    // No subcommand-specific arguments; uses global --json flag
}

/// Print the built-in style guide.
#[instrument(name = "cmd_style_guide", skip_all)]
pub fn cmd_style_guide(_args: StyleGuideArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing style-guide command");

    if global_json {
        let value = serde_json::json!({ "style_guide": style_guide() });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", style_guide());
    }
    Ok(())
}
