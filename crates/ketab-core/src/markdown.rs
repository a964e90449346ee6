//! Markdown processing utilities.
//!
//! Chapter files are markdown scaffolds. Before measuring a draft, headings,
//! code, and frontmatter are dropped so only the author's prose is counted.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose.
///
/// Block boundaries (paragraphs, list items, blockquotes) become blank lines
/// so paragraph segmentation still works on the result.
///
/// Removes:
/// - Code blocks and inline code
/// - HTML
/// - YAML frontmatter
/// - Headings
///
/// Preserves:
/// - Link text
/// - Emphasis/strong text (without markers)
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut blocks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_)) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                current.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                current.push(' ');
            }

            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::TableCell)
                if skip_depth == 0 =>
            {
                flush_block(&mut blocks, &mut current);
            }

            _ => {}
        }
    }
    flush_block(&mut blocks, &mut current);

    blocks.join("\n\n")
}

fn flush_block(blocks: &mut Vec<String>, current: &mut String) {
    let block = current.trim();
    if !block.is_empty() {
        blocks.push(block.to_string());
    }
    current.clear();
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
