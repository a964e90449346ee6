//! Core library for ketab.
//!
//! This crate provides the prose analyzer, book project model, and
//! configuration used by the `ketab` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`analysis`] - Text metrics and typography alerts
//! - [`text`] - Paragraph, sentence, and word segmentation
//! - [`markdown`] - Markdown-to-prose conversion for chapter files
//! - [`project`] - Book metadata persistence and chapter scaffolding
//! - [`outline`] - Outline, style guide, and research prompts
//! - [`progress`] - Drafted word counts per chapter
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use ketab_core::analysis::{analyze, format_report};
//!
//! let metrics = analyze("One sentence. Another one!");
//! assert_eq!(metrics.sentence_count, 2);
//! println!("{}", format_report(&metrics));
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod markdown;
pub mod outline;
pub mod progress;
pub mod project;
pub mod text;

pub use analysis::{TextMetrics, analyze, format_report};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, ProjectError, ProjectResult};
pub use progress::{ChapterProgress, ProjectProgress, project_progress};
pub use project::{BookProject, Chapter, DraftStatus, NewProject};

/// Default maximum input size for analyzed files (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
