//! Book project metadata and chapter scaffolding.
//!
//! A project is a directory containing:
//! - `book.json`: project metadata and the chapter list
//! - `chapters/`: one markdown template per chapter (`NN-slug.md`)
//! - `guidelines.md`: writing guidelines generated at creation time
//!
//! # Example
//! ```no_run
//! use camino::Utf8Path;
//! use ketab_core::project::{NewProject, create_project};
//!
//! let mut project = create_project(
//!     Utf8Path::new("my-book"),
//!     NewProject::new("The Long Road", "Sara", "Essay", "Formal", 60_000),
//! )
//! .unwrap();
//! project.add_chapter("Beginnings", "", Vec::new()).unwrap();
//! ```

use std::fmt::Write as _;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::{ProjectError, ProjectResult};

/// Metadata file name inside a project directory.
pub const METADATA_FILE: &str = "book.json";

/// Chapter directory name inside a project directory.
pub const CHAPTERS_DIR: &str = "chapters";

/// Guidelines file name inside a project directory.
pub const GUIDELINES_FILE: &str = "guidelines.md";

/// Default project language tag.
pub const DEFAULT_LANGUAGE: &str = "fa";

/// Heading under which a chapter's draft text lives.
pub const BODY_HEADING: &str = "## Chapter body";

/// Placeholder line written under [`BODY_HEADING`] in a new chapter.
pub const BODY_PLACEHOLDER: &str = "(Write the full draft of the chapter here)";

/// Goals written into a chapter template when none are given.
const DEFAULT_GOALS: &[&str] = &[
    "Open with the central problem or question.",
    "Use concrete, local stories and examples.",
    "Support the argument with credible quotations.",
];

/// Characters replaced by `-` when building a chapter slug.
const SLUG_SEPARATORS: &[char] = &[
    ' ', '\u{200C}', '\t', '\n', '\r', '/', '\\', '\u{060C}', '\u{061F}', '\u{061B}', '!',
];

/// Drafting progress of a chapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DraftStatus {
    /// Template only.
    #[default]
    NotStarted,
    /// First draft in progress.
    Drafting,
    /// Being revised and edited.
    Revising,
    /// Finished.
    Done,
}

impl DraftStatus {
    /// Returns the status as it appears in `book.json`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::Drafting => "drafting",
            Self::Revising => "revising",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chapter of the book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Chapter {
    /// Chapter title.
    pub title: String,
    /// File name under `chapters/`.
    pub filename: String,
    /// Short summary (may be empty).
    #[serde(default)]
    pub summary: String,
    /// Goals for the chapter.
    #[serde(default)]
    pub goals: Vec<String>,
    /// Drafting progress.
    #[serde(default)]
    pub draft_status: DraftStatus,
}

/// Project metadata, persisted as `book.json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BookProject {
    /// Project directory.
    pub root: Utf8PathBuf,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Genre.
    pub genre: String,
    /// Intended tone (formal, conversational, ...).
    #[serde(default)]
    pub tone: String,
    /// Target length of the whole book in words.
    #[serde(default)]
    pub target_length_words: u64,
    /// Creation timestamp (RFC 3339, UTC).
    #[serde(default)]
    pub created_at: String,
    /// Short synopsis.
    #[serde(default)]
    pub synopsis: String,
    /// Intended audience.
    #[serde(default)]
    pub audience: String,
    /// Language tag.
    #[serde(default = "default_language")]
    pub language: String,
    /// Project-specific writing rules.
    #[serde(default)]
    pub custom_guidelines: Vec<String>,
    /// Chapters in reading order.
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Input for [`create_project`].
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Genre.
    pub genre: String,
    /// Intended tone.
    pub tone: String,
    /// Target length in words.
    pub target_length_words: u64,
    /// Short synopsis.
    pub synopsis: String,
    /// Intended audience.
    pub audience: String,
    /// Project-specific writing rules.
    pub custom_guidelines: Vec<String>,
}

impl NewProject {
    /// Create input with the required fields set.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        tone: impl Into<String>,
        target_length_words: u64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            tone: tone.into(),
            target_length_words,
            ..Self::default()
        }
    }

    /// Set the synopsis.
    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    /// Set the intended audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Set project-specific writing rules.
    pub fn with_guidelines(mut self, guidelines: Vec<String>) -> Self {
        self.custom_guidelines = guidelines;
        self
    }
}

/// Create a new project in `root`.
///
/// Writes `book.json`, creates `chapters/`, and generates `guidelines.md`.
/// An existing project in `root` is overwritten.
#[tracing::instrument(skip(input), fields(title = %input.title))]
pub fn create_project(root: &Utf8Path, input: NewProject) -> ProjectResult<BookProject> {
    let project = BookProject {
        root: root.to_path_buf(),
        title: input.title,
        author: input.author,
        genre: input.genre,
        tone: input.tone,
        target_length_words: input.target_length_words,
        created_at: now_rfc3339(),
        synopsis: input.synopsis,
        audience: input.audience,
        language: default_language(),
        custom_guidelines: input.custom_guidelines,
        chapters: Vec::new(),
    };
    project.save()?;

    let path = root.join(GUIDELINES_FILE);
    std::fs::write(&path, guidelines(&project)).map_err(|e| ProjectError::io(path, e))?;

    tracing::info!(root = %root, "project created");
    Ok(project)
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

impl BookProject {
    /// Load a project from `root/book.json`.
    ///
    /// The returned project's `root` is `root`, whatever path the file
    /// recorded when it was written.
    #[tracing::instrument]
    pub fn load(root: &Utf8Path) -> ProjectResult<Self> {
        let path = root.join(METADATA_FILE);
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProjectError::NotFound(root.to_path_buf()));
            }
            Err(e) => return Err(ProjectError::io(path, e)),
        };

        let mut project: Self = serde_json::from_str(&data)
            .map_err(|source| ProjectError::Metadata { path, source })?;
        project.root = root.to_path_buf();
        tracing::debug!(chapters = project.chapters.len(), "project loaded");
        Ok(project)
    }

    /// Write `book.json`, creating the project and chapter directories.
    pub fn save(&self) -> ProjectResult<()> {
        let chapters_dir = self.chapters_dir();
        std::fs::create_dir_all(&chapters_dir).map_err(|e| ProjectError::io(chapters_dir, e))?;

        let path = self.root.join(METADATA_FILE);
        let mut json = serde_json::to_string_pretty(self).map_err(|source| {
            ProjectError::Metadata {
                path: path.clone(),
                source,
            }
        })?;
        json.push('\n');
        std::fs::write(&path, json).map_err(|e| ProjectError::io(path, e))
    }

    /// Directory holding chapter files.
    pub fn chapters_dir(&self) -> Utf8PathBuf {
        self.root.join(CHAPTERS_DIR)
    }

    /// Path of a chapter's file.
    pub fn chapter_path(&self, chapter: &Chapter) -> Utf8PathBuf {
        self.chapters_dir().join(&chapter.filename)
    }

    /// Write a chapter's template file, then append it and save metadata.
    ///
    /// On failure the project, in memory and on disk, is left as it was.
    #[tracing::instrument(skip(self, summary, goals))]
    pub fn add_chapter(
        &mut self,
        title: &str,
        summary: &str,
        goals: Vec<String>,
    ) -> ProjectResult<Chapter> {
        let index = self.chapters.len() + 1;
        let chapter = Chapter {
            title: title.to_string(),
            filename: format!("{index:02}-{}.md", slugify(title)),
            summary: summary.to_string(),
            goals,
            draft_status: DraftStatus::default(),
        };

        let chapters_dir = self.chapters_dir();
        std::fs::create_dir_all(&chapters_dir).map_err(|e| ProjectError::io(chapters_dir, e))?;
        let path = self.chapter_path(&chapter);
        std::fs::write(&path, chapter_template(&chapter))
            .map_err(|e| ProjectError::io(path.clone(), e))?;

        self.chapters.push(chapter.clone());
        if let Err(e) = self.save() {
            self.chapters.pop();
            let _ = std::fs::remove_file(&path);
            return Err(e);
        }

        tracing::info!(filename = %chapter.filename, "chapter added");
        Ok(chapter)
    }

    /// Set the draft status of chapter `number` (1-based) and save.
    #[tracing::instrument(skip(self))]
    pub fn set_draft_status(&mut self, number: usize, status: DraftStatus) -> ProjectResult<&Chapter> {
        let count = self.chapters.len();
        if number == 0 || number > count {
            return Err(ProjectError::NoSuchChapter { number, count });
        }
        self.chapters[number - 1].draft_status = status;
        self.save()?;
        Ok(&self.chapters[number - 1])
    }
}

/// Turn a chapter title into a file-name slug.
///
/// Spaces, zero-width non-joiners, control whitespace, path separators and
/// Persian punctuation become `-`; the result is lowercased. Other characters,
/// including Persian letters, are kept.
pub fn slugify(text: &str) -> String {
    text.trim().replace(SLUG_SEPARATORS, "-").to_lowercase()
}

/// Render the markdown template for a new chapter.
pub fn chapter_template(chapter: &Chapter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", chapter.title);

    out.push_str("Summary:\n");
    if chapter.summary.is_empty() {
        out.push_str("(Write the chapter summary here)\n\n");
    } else {
        let _ = writeln!(out, "{}\n", chapter.summary);
    }

    out.push_str("Chapter goals:\n");
    if chapter.goals.is_empty() {
        for goal in DEFAULT_GOALS {
            let _ = writeln!(out, "- {goal}");
        }
    } else {
        for goal in &chapter.goals {
            let _ = writeln!(out, "- {goal}");
        }
    }

    out.push_str(
        "\n## Suggested structure\n\
         1. Introduction and the guiding question\n\
         2. Background and assumptions\n\
         3. Develop the ideas with documented examples\n\
         4. Interim conclusion and the next question\n\
         5. Research notes and sources\n\
         \n",
    );
    let _ = writeln!(out, "{BODY_HEADING}\n{BODY_PLACEHOLDER}\n");
    out.push_str(
        "## Revision and editing\n\
         - Check every sentence for clarity.\n\
         - Keep the tone consistent with the rest of the book.\n\
         - Make sure the sections follow logically.\n\
         \n\
         ## Chapter references\n\
         - Author, \u{ab}Title\u{bb}, Publisher, Year.\n",
    );
    out
}

/// Render `guidelines.md` for a project.
pub fn guidelines(project: &BookProject) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Writing guidelines for \u{ab}{}\u{bb}\n", project.title);

    out.push_str("## Overview\n");
    let _ = writeln!(out, "- Author: {}", project.author);
    let _ = writeln!(out, "- Genre: {}", project.genre);
    let _ = writeln!(out, "- Tone: {}", project.tone);
    let _ = writeln!(out, "- Target length: {} words\n", project.target_length_words);

    out.push_str("## Audience and purpose\n");
    let audience = non_empty_or(&project.audience, "not specified");
    let synopsis = non_empty_or(&project.synopsis, "not written yet");
    let _ = writeln!(out, "- Primary audience: {audience}");
    let _ = writeln!(out, "- Synopsis: {synopsis}\n");

    out.push_str(
        "## Recommended principles\n\
         - Keep paragraphs coherent and on topic.\n\
         - Use Persian punctuation correctly, including \u{ab}\u{060C}\u{bb} and \u{ab}\u{061B}\u{bb}.\n\
         - Vary vocabulary with synonyms to avoid repetition.\n\
         - Cite sources in the chosen style guide (e.g. APA).\n\
         - Quote accurately and record page numbers.\n\n",
    );

    out.push_str("## Project-specific rules\n");
    for rule in &project.custom_guidelines {
        let _ = writeln!(out, "- {rule}");
    }
    out.push_str("\nGood luck!\n");
    out
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
