//! Outline, style guide, and research prompt generation.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::project::BookProject;

/// Number of chapters proposed when none is configured.
pub const DEFAULT_SECTIONS: usize = 8;

/// Lower bound for a proposed chapter's word target.
pub const DEFAULT_MIN_CHAPTER_WORDS: u64 = 1500;

/// One proposed chapter in an outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineItem {
    /// Chapter title.
    pub title: String,
    /// What the chapter should cover.
    pub summary: String,
    /// Suggested word count.
    pub word_target: u64,
}

/// Propose an outline of `sections` chapters.
///
/// The book's target length is spread evenly across chapters, but no chapter
/// target drops below `min_chapter_words`.
#[tracing::instrument(skip(project), fields(title = %project.title))]
pub fn build_outline(
    project: &BookProject,
    sections: usize,
    min_chapter_words: u64,
) -> Vec<OutlineItem> {
    let per_chapter = project.target_length_words / sections.max(1) as u64;
    let word_target = per_chapter.max(min_chapter_words);
    let audience = if project.audience.is_empty() {
        "general"
    } else {
        project.audience.as_str()
    };

    (1..=sections)
        .map(|idx| OutlineItem {
            title: format!("Chapter {idx}"),
            summary: format!(
                "Develop the narrative line in part {idx}, with emphasis on the {audience} audience."
            ),
            word_target,
        })
        .collect()
}

/// Render an outline as markdown.
pub fn format_outline(outline: &[OutlineItem]) -> String {
    let mut out = String::from("## Proposed outline\n");
    for item in outline {
        let _ = writeln!(out, "### {}", item.title);
        let _ = writeln!(out, "- Summary: {}", item.summary);
        let _ = writeln!(out, "- Word target: {}\n", item.word_target);
    }
    out
}

/// The built-in style guide for long-form Persian writing.
pub fn style_guide() -> &'static str {
    "# Style guide for long-form Persian books\n\
     \n\
     - Use the zero-width non-joiner in common compounds (\u{ab}\u{0645}\u{06CC}\u{200C}\u{0631}\u{0648}\u{062F}\u{bb}, \u{ab}\u{0647}\u{0627}\u{06CC}\u{bb}).\n\
     - Break long paragraphs into shorter ones to keep them readable.\n\
     - Number headings hierarchically (1, 1.1, 1.1.1).\n\
     - Set long quotations as block quotes with a precise source.\n\
     - Put statistics and data in tables and state the unit of measure.\n\
     - End each chapter with \u{ab}Summary and key lessons\u{bb} and \u{ab}Questions for further study\u{bb}.\n\
     - Keep in-text citations consistent with one style (APA or similar).\n\
     - Maintain a closing glossary for technical terms and keep every entry up to date.\n\
     - When quoting poetry or classical texts, add diacritics and cite the source.\n\
     - Use Persian digits in running text, except in code or URLs.\n"
}

/// Research and interview topics.
pub const RESEARCH_PROMPTS: &[&str] = &[
    "Trace the historical development of the subject and its effect on today",
    "Interview experts and quote their views",
    "Study one successful Iranian or international case in depth",
    "Compare with similar works and show what sets this book apart",
    "Ground the argument in academic sources and journal articles",
    "Collect technical vocabulary and build a closing glossary",
];

/// Render research prompts for a project as markdown.
pub fn research_prompts(project: &BookProject) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "## Research and interview topics for \u{ab}{}\u{bb}",
        project.title
    );
    for prompt in RESEARCH_PROMPTS {
        let _ = writeln!(out, "- {prompt}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn project(target: u64, audience: &str) -> BookProject {
        BookProject {
            root: Utf8PathBuf::from("book"),
            title: "The Long Road".to_string(),
            author: "Sara".to_string(),
            genre: "Essay".to_string(),
            tone: "Formal".to_string(),
            target_length_words: target,
            created_at: String::new(),
            synopsis: String::new(),
            audience: audience.to_string(),
            language: "fa".to_string(),
            custom_guidelines: Vec::new(),
            chapters: Vec::new(),
        }
    }

    #[test]
    fn target_spread_across_sections() {
        let outline = build_outline(&project(80_000, ""), 8, DEFAULT_MIN_CHAPTER_WORDS);
        assert_eq!(outline.len(), 8);
        assert!(outline.iter().all(|item| item.word_target == 10_000));
        assert_eq!(outline[0].title, "Chapter 1");
        assert_eq!(outline[7].title, "Chapter 8");
    }

    #[test]
    fn word_target_has_floor() {
        let outline = build_outline(&project(4_000, ""), 8, DEFAULT_MIN_CHAPTER_WORDS);
        assert_eq!(outline[0].word_target, 1500);
    }

    #[test]
    fn zero_sections_is_empty() {
        assert!(build_outline(&project(80_000, ""), 0, 1500).is_empty());
    }

    #[test]
    fn summary_mentions_audience() {
        let general = build_outline(&project(10_000, ""), 1, 1500);
        assert!(general[0].summary.contains("general audience"));
        let students = build_outline(&project(10_000, "students"), 1, 1500);
        assert!(students[0].summary.contains("students audience"));
    }

    #[test]
    fn formatted_outline_has_heading_per_item() {
        let text = format_outline(&build_outline(&project(20_000, ""), 2, 1500));
        assert!(text.starts_with("## Proposed outline\n"));
        assert_eq!(text.matches("### Chapter").count(), 2);
        assert!(text.contains("- Word target: 10000\n"));
    }

    #[test]
    fn style_guide_is_markdown_list() {
        let guide = style_guide();
        assert!(guide.starts_with("# Style guide"));
        assert_eq!(guide.lines().filter(|l| l.starts_with("- ")).count(), 10);
    }

    #[test]
    fn research_prompts_titled_with_project() {
        let text = research_prompts(&project(1, ""));
        assert!(text.contains("\u{ab}The Long Road\u{bb}"));
        assert_eq!(text.matches("\n- ").count(), RESEARCH_PROMPTS.len());
    }
}
