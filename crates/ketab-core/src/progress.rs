//! Drafting progress across a project's chapters.
//!
//! Only the text under a chapter's body heading counts as drafted; the
//! scaffolding around it (goals, structure, checklist) does not.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::error::{ProjectError, ProjectResult};
use crate::markdown;
use crate::project::{BODY_HEADING, BODY_PLACEHOLDER, BookProject, DraftStatus};
use crate::text::normalize_line_endings;

/// Progress of one chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterProgress {
    /// 1-based chapter number.
    pub number: usize,
    /// Chapter title.
    pub title: String,
    /// File name under `chapters/`.
    pub filename: String,
    /// Drafting status from the metadata.
    pub draft_status: DraftStatus,
    /// Words written in the chapter body.
    pub words: usize,
    /// Whether the chapter file is missing on disk.
    pub missing: bool,
}

/// Progress of the whole project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectProgress {
    /// Book title.
    pub title: String,
    /// Target length in words.
    pub target_length_words: u64,
    /// Words drafted across all chapters.
    pub drafted_words: usize,
    /// Drafted share of the target, in percent (0 without a target).
    pub percent_of_target: f64,
    /// Per-chapter breakdown, in reading order.
    pub chapters: Vec<ChapterProgress>,
}

/// Measure every chapter of `project`.
///
/// Missing chapter files count as zero words and are flagged, not errors.
/// A chapter file larger than `max_bytes` is an error.
#[tracing::instrument(skip(project), fields(root = %project.root))]
pub fn project_progress(
    project: &BookProject,
    max_bytes: Option<usize>,
) -> ProjectResult<ProjectProgress> {
    let mut chapters = Vec::with_capacity(project.chapters.len());

    for (idx, chapter) in project.chapters.iter().enumerate() {
        let path = project.chapter_path(chapter);
        let (words, missing) = match read_chapter(&path, max_bytes)? {
            Some(text) => (drafted_words(&text), false),
            None => {
                tracing::warn!(path = %path, "chapter file missing");
                (0, true)
            }
        };
        chapters.push(ChapterProgress {
            number: idx + 1,
            title: chapter.title.clone(),
            filename: chapter.filename.clone(),
            draft_status: chapter.draft_status,
            words,
            missing,
        });
    }

    let drafted_words: usize = chapters.iter().map(|c| c.words).sum();
    let percent_of_target = if project.target_length_words == 0 {
        0.0
    } else {
        let pct = drafted_words as f64 / project.target_length_words as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    };

    Ok(ProjectProgress {
        title: project.title.clone(),
        target_length_words: project.target_length_words,
        drafted_words,
        percent_of_target,
        chapters,
    })
}

/// Read a chapter file, `None` when it does not exist.
fn read_chapter(path: &Utf8Path, max_bytes: Option<usize>) -> ProjectResult<Option<String>> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ProjectError::io(path.to_path_buf(), e)),
    };
    if let Some(limit) = max_bytes
        && metadata.len() > limit as u64
    {
        return Err(ProjectError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| ProjectError::io(path.to_path_buf(), e))?;
    Ok(Some(normalize_line_endings(text)))
}

/// Count words the author has written in a chapter file.
pub fn drafted_words(chapter_text: &str) -> usize {
    let body = chapter_body(chapter_text).replace(BODY_PLACEHOLDER, "");
    analysis::analyze(&markdown::strip_to_prose(&body)).word_count
}

/// Text between the body heading and the next `## ` heading.
///
/// Files without the heading are counted whole.
fn chapter_body(text: &str) -> &str {
    let Some(start) = text.find(BODY_HEADING) else {
        return text;
    };
    let body = &text[start + BODY_HEADING.len()..];
    match body.find("\n## ") {
        Some(end) => &body[..end],
        None => body,
    }
}
