//! Crate-wide error types.
//!
//! The evaluator itself never fails: malformed queries are evaluated
//! literally. Errors only arise at the boundaries around it, i.e. reading
//! files, decoding JSON, loading config, and optional strict validation.
//! Library modules return [`Error`]; the binary wraps it with `anyhow`.
//!
//! # Example
//!
//! ```ignore
//! use mediashelf::error::{Result, ResultExt};
//!
//! fn load_query(path: &Path) -> Result<Query> {
//!     let text = std::fs::read_to_string(path).with_context("reading query")?;
//!     Query::from_json(&text)
//! }
//! ```

use std::path::PathBuf;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding/encoding error (queries, entries, playlists)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Query rejected by strict validation
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Operation not allowed for this kind of playlist
    #[error("Playlist {id}: {message}")]
    PlaylistKind { id: i64, message: String },

    /// Input file missing
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid query error.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    /// Create a playlist kind error.
    pub fn playlist_kind(id: i64, message: impl Into<String>) -> Self {
        Self::PlaylistKind {
            id,
            message: message.into(),
        }
    }

    /// Create a not found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Json(e).context(ctx))
    }
}
