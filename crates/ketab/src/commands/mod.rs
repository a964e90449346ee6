//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod add_chapter;
pub mod analyze;
pub mod info;
pub mod init;
pub mod mark;
pub mod outline;
pub mod prompts;
pub mod status;
pub mod style_guide;

/// Read a file and validate its size against the configured limit.
///
/// CRLF line endings are normalized to LF.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Check the size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(ketab_core::text::normalize_line_endings(content))
}

/// Load the book project at `path` with CLI-friendly context.
pub fn load_project(path: &Utf8Path) -> anyhow::Result<ketab_core::BookProject> {
    ketab_core::BookProject::load(path)
        .with_context(|| format!("failed to load book project at {path}"))
}
