//! Error types for ketab-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while reading or writing a book project.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// No `book.json` exists in the given directory.
    #[error("no book project found at {0} (missing book.json)")]
    NotFound(Utf8PathBuf),

    /// A project file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `book.json` exists but is not a valid project document.
    #[error("malformed project metadata in {path}: {source}")]
    Metadata {
        /// Path to the offending `book.json`.
        path: Utf8PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A chapter file exceeds the configured input size limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// The oversized file.
        path: Utf8PathBuf,
        /// Its size in bytes.
        size: u64,
        /// The configured limit in bytes.
        limit: usize,
    },

    /// A chapter number outside `1..=count` was requested.
    #[error("no chapter {number} (project has {count} chapters)")]
    NoSuchChapter {
        /// The 1-based chapter number that was requested.
        number: usize,
        /// How many chapters the project has.
        count: usize,
    },
}

impl ProjectError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using [`ProjectError`].
pub type ProjectResult<T> = Result<T, ProjectError>;
