//! Core data models for the media library.
//!
//! Defines the entities the query engine works on: [`Entry`], [`Tag`],
//! and the two tag associations [`AutoTag`] and [`UserTag`].
//! These arrive fully populated from the surrounding system; nothing in
//! this crate creates or mutates them.
//!
//! # JSON Shape
//!
//! Field names are snake_case, matching the stored records:
//! - `auto_tags` - classifier-assigned tags with a `confidence`
//! - `user_tags` - manually assigned tags with a `priority`
//! - `properties` - free-form string key/value metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A tag that can be attached to entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Database ID
    pub id: i64,
    /// Display name, also the key used by tag filters
    pub name: String,
    /// Optional parent tag (hierarchy is expected to be one level deep)
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl Tag {
    /// Create a top-level tag.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
        }
    }

    /// Create a tag nested under `parent_id`.
    pub fn with_parent(id: i64, name: impl Into<String>, parent_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: Some(parent_id),
        }
    }

    /// Collect the IDs of this tag's ancestors, nearest first.
    ///
    /// Stops at the first ID already visited, so a misconfigured cycle
    /// terminates instead of looping forever. Unknown parents end the walk.
    pub fn ancestors(&self, tags_by_id: &HashMap<i64, Tag>) -> Vec<i64> {
        let mut seen = HashSet::from([self.id]);
        let mut chain = Vec::new();
        let mut next = self.parent_id;

        while let Some(id) = next {
            if !seen.insert(id) {
                break;
            }
            chain.push(id);
            next = tags_by_id.get(&id).and_then(|t| t.parent_id);
        }

        chain
    }
}

/// A tag attached by the automatic classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoTag {
    pub tag: Tag,
    /// Classifier confidence (0.0 - 1.0)
    #[serde(default)]
    pub confidence: f32,
}

/// A tag attached manually by a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTag {
    pub tag: Tag,
    /// Manual rank, lower is more important
    #[serde(default)]
    pub priority: i32,
}

/// A cataloged media item (video or audio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Database ID
    pub id: i64,
    /// Owning library, if any
    #[serde(default)]
    pub library_id: Option<i64>,
    /// Title (from the source page or filename)
    pub title: String,
    /// Longer description, when the source provided one
    #[serde(default)]
    pub description: Option<String>,
    /// Source platform label, e.g. "youtube"
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    /// Rating, conventionally 0.0 - 5.0
    #[serde(default)]
    pub rating: Option<f64>,
    /// When the entry was added to the library
    pub created_at: DateTime<Utc>,
    /// Play count, used for popularity ordering
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub auto_tags: Vec<AutoTag>,
    #[serde(default)]
    pub user_tags: Vec<UserTag>,
    /// Free-form metadata such as genre or year
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl Entry {
    /// Names of every attached tag, auto tags first. May contain duplicates
    /// when the same tag is both auto and user assigned.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.auto_tags
            .iter()
            .map(|t| t.tag.name.as_str())
            .chain(self.user_tags.iter().map(|t| t.tag.name.as_str()))
    }

    /// Union of auto-tag and user-tag names.
    pub fn effective_tags(&self) -> HashSet<&str> {
        self.tag_names().collect()
    }

    /// Look up a property value by key.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}
