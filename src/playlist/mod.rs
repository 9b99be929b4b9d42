//! Playlist records and membership resolution.
//!
//! A playlist is either static (an explicit ordered list of entry IDs) or
//! dynamic (a stored [`Query`] evaluated on every read). The kind is fixed
//! when the playlist is created.
//!
//! # Stored Shape
//!
//! ```json
//! {
//!   "id": 4,
//!   "library_id": 1,
//!   "name": "Top rated",
//!   "is_dynamic": true,
//!   "query": "{\"min_rating\":4,\"sort_by\":\"rating\"}"
//! }
//! ```
//!
//! `query` may be the serialized JSON string (as stored in the database
//! column) or an inline object.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::evaluator::{Evaluator, QueryResult};
use crate::model::Entry;
use crate::query::Query;

/// What a playlist contains.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistContents {
    /// Manually curated entries, in play order
    Static { entry_ids: Vec<i64> },
    /// Membership computed from a query
    Dynamic { query: Query },
}

/// A playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlaylistRecord", into = "PlaylistRecord")]
pub struct Playlist {
    id: i64,
    library_id: Option<i64>,
    name: String,
    description: Option<String>,
    contents: PlaylistContents,
}

impl Playlist {
    /// Create a static playlist.
    pub fn new_static(id: i64, name: impl Into<String>, entry_ids: Vec<i64>) -> Self {
        Self {
            id,
            library_id: None,
            name: name.into(),
            description: None,
            contents: PlaylistContents::Static { entry_ids },
        }
    }

    /// Create a dynamic playlist.
    pub fn new_dynamic(id: i64, name: impl Into<String>, query: Query) -> Self {
        Self {
            id,
            library_id: None,
            name: name.into(),
            description: None,
            contents: PlaylistContents::Dynamic { query },
        }
    }

    /// Scope the playlist to a library.
    pub fn in_library(mut self, library_id: i64) -> Self {
        self.library_id = Some(library_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn library_id(&self) -> Option<i64> {
        self.library_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn contents(&self) -> &PlaylistContents {
        &self.contents
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.contents, PlaylistContents::Dynamic { .. })
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the stored query of a dynamic playlist.
    pub fn set_query(&mut self, query: Query) -> Result<()> {
        match self.contents {
            PlaylistContents::Dynamic { query: ref mut stored } => {
                *stored = query;
                Ok(())
            }
            PlaylistContents::Static { .. } => Err(Error::playlist_kind(
                self.id,
                "static playlist cannot hold a query",
            )),
        }
    }

    /// Replace the entries of a static playlist.
    pub fn set_entries(&mut self, entry_ids: Vec<i64>) -> Result<()> {
        match self.contents {
            PlaylistContents::Static {
                entry_ids: ref mut stored,
            } => {
                *stored = entry_ids;
                Ok(())
            }
            PlaylistContents::Dynamic { .. } => Err(Error::playlist_kind(
                self.id,
                "dynamic playlist membership comes from its query",
            )),
        }
    }

    /// The query actually evaluated for a dynamic playlist.
    ///
    /// A library-scoped playlist filters by its library unless the stored
    /// query already names one. Returns `None` for static playlists.
    pub fn effective_query(&self) -> Option<Query> {
        let PlaylistContents::Dynamic { ref query } = self.contents else {
            return None;
        };
        match (self.library_id, query.library_id()) {
            (Some(library_id), None) => Some(query.to_builder().library(library_id).build()),
            _ => Some(query.clone()),
        }
    }

    /// Resolve membership against the current entry snapshot.
    ///
    /// Dynamic playlists are evaluated fresh on each call. Static playlists
    /// keep their curated order; IDs with no matching entry are skipped.
    pub fn resolve<'a>(&self, evaluator: &Evaluator, entries: &'a [Entry]) -> QueryResult<'a> {
        match self.contents {
            PlaylistContents::Dynamic { .. } => {
                let query = self.effective_query().unwrap_or_default();
                debug!(playlist = self.id, "Resolving dynamic playlist");
                evaluator.evaluate(&query, entries)
            }
            PlaylistContents::Static { ref entry_ids } => {
                let by_id: HashMap<i64, &Entry> = entries.iter().map(|e| (e.id, e)).collect();
                let found: Vec<&Entry> = entry_ids
                    .iter()
                    .filter_map(|id| by_id.get(id).copied())
                    .collect();
                if found.len() < entry_ids.len() {
                    warn!(
                        playlist = self.id,
                        missing = entry_ids.len() - found.len(),
                        "Static playlist references unknown entries"
                    );
                }
                QueryResult {
                    total_count: found.len(),
                    entries: found,
                }
            }
        }
    }

    /// Decode a playlist from its stored JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Stored query column: serialized text or an inline object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum StoredQuery {
    Text(String),
    Inline(Query),
}

impl<'de> Deserialize<'de> for StoredQuery {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(text) => Ok(Self::Text(text)),
            other => Query::deserialize(other)
                .map(Self::Inline)
                .map_err(|e| D::Error::custom(format!("decoding query: {}", e))),
        }
    }
}

/// Flat storage representation of a playlist, as kept in the database row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRecord {
    id: i64,
    #[serde(default)]
    library_id: Option<i64>,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    is_dynamic: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<StoredQuery>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    entry_ids: Vec<i64>,
}

impl TryFrom<PlaylistRecord> for Playlist {
    type Error = Error;

    fn try_from(record: PlaylistRecord) -> Result<Self> {
        let contents = if record.is_dynamic {
            let query = match record.query {
                Some(StoredQuery::Text(text)) => Query::from_json(&text)?,
                Some(StoredQuery::Inline(query)) => query,
                None => {
                    return Err(Error::playlist_kind(
                        record.id,
                        "dynamic playlist has no stored query",
                    ));
                }
            };
            PlaylistContents::Dynamic { query }
        } else {
            PlaylistContents::Static {
                entry_ids: record.entry_ids,
            }
        };

        Ok(Self {
            id: record.id,
            library_id: record.library_id,
            name: record.name,
            description: record.description,
            contents,
        })
    }
}

impl From<Playlist> for PlaylistRecord {
    fn from(playlist: Playlist) -> Self {
        let (is_dynamic, query, entry_ids) = match playlist.contents {
            PlaylistContents::Dynamic { query } => (true, Some(StoredQuery::Inline(query)), Vec::new()),
            PlaylistContents::Static { entry_ids } => (false, None, entry_ids),
        };
        Self {
            id: playlist.id,
            library_id: playlist.library_id,
            name: playlist.name,
            description: playlist.description,
            is_dynamic,
            query,
            entry_ids,
        }
    }
}
