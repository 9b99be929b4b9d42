//! Mediashelf - dynamic playlist query engine for a self-hosted media library.
//!
//! The library server stores dynamic playlists as declarative JSON queries.
//! This crate evaluates them: given a [`Query`] and a snapshot of [`Entry`]
//! records (tags and properties attached), it returns the matching entries
//! in order plus the total match count.
//!
//! ```ignore
//! use mediashelf::{Query, SortKey, evaluate};
//!
//! let query = Query::builder().tag("music").sort_by(SortKey::Rating).limit(25).build();
//! let result = evaluate(&query, &entries);
//! println!("{} of {}", result.len(), result.total_count);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod playlist;
pub mod query;
#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
pub use evaluator::{Evaluator, QueryResult, SearchScope, evaluate};
pub use model::{AutoTag, Entry, Tag, UserTag};
pub use playlist::{Playlist, PlaylistContents};
pub use query::{Query, QueryBuilder, QueryIssue, SortKey, SortOrder};
