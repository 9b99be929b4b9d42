//! Declarative dynamic-playlist query.
//!
//! A [`Query`] is the stored filter/sort descriptor of a dynamic playlist.
//! Every field is optional; an absent field (or an explicit JSON `null`)
//! places no constraint on that dimension. Unknown JSON fields are ignored.
//!
//! Queries are immutable once built. Outside this crate they can only be
//! produced by deserialization or by [`QueryBuilder`].
//!
//! ```ignore
//! let query = Query::builder()
//!     .platform("youtube")
//!     .tag("music")
//!     .sort(SortKey::Rating, SortOrder::Desc)
//!     .limit(20)
//!     .build();
//! ```

mod builder;
mod validate;

pub use builder::QueryBuilder;
pub use validate::QueryIssue;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, ResultExt};

/// Field a dynamic playlist is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Creation timestamp
    AddedAt,
    /// Case-insensitive title
    Title,
    /// Rating, unrated entries lowest
    Rating,
    /// Popularity
    ViewCount,
    /// Unseeded shuffle, order differs between calls
    Random,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::AddedAt => "added_at",
            SortKey::Title => "title",
            SortKey::Rating => "rating",
            SortKey::ViewCount => "view_count",
            SortKey::Random => "random",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    /// Applied when `sort_by` is set without a direction
    #[default]
    Desc,
}

/// Dynamic playlist filter/sort descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) library_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) favorite: Option<bool>,
    /// Entry must carry all of these
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tags: Option<Vec<String>>,
    /// Entry must carry at least one of these
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tags_any: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) properties: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sort_by: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sort_order: Option<SortOrder>,
    /// Negative values mean unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) limit: Option<i64>,
}

impl Query {
    /// Start building a query.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Start a builder pre-filled with this query's fields.
    pub fn to_builder(&self) -> QueryBuilder {
        QueryBuilder::from(self.clone())
    }

    /// Decode a query from its stored JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context("decoding query")
    }

    /// Encode to the stored JSON form. Absent fields are omitted.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).with_context("encoding query")
    }

    /// True when no field constrains, orders or limits the result.
    pub fn is_empty(&self) -> bool {
        *self == Query::default()
    }

    pub fn library_id(&self) -> Option<i64> {
        self.library_id
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn favorite(&self) -> Option<bool> {
        self.favorite
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn tags_any(&self) -> &[String] {
        self.tags_any.as_deref().unwrap_or_default()
    }

    pub fn properties(&self) -> Option<&BTreeMap<String, String>> {
        self.properties.as_ref()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn rating_bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.min_rating, self.max_rating)
    }

    pub fn sort_by(&self) -> Option<SortKey> {
        self.sort_by
    }

    /// Effective direction: the stored one, or `desc` when unset.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order.unwrap_or_default()
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let json = r#"{
            "library_id": 3,
            "platform": "youtube",
            "favorite": true,
            "tags": ["music", "live"],
            "tags_any": ["jazz"],
            "properties": {"genre": "Action"},
            "search": "concert",
            "min_rating": 2.5,
            "max_rating": 5,
            "sort_by": "view_count",
            "sort_order": "asc",
            "limit": 10
        }"#;
        let query = Query::from_json(json).expect("Should parse full query");
        assert_eq!(query.library_id(), Some(3));
        assert_eq!(query.platform(), Some("youtube"));
        assert_eq!(query.favorite(), Some(true));
        assert_eq!(query.tags(), ["music", "live"]);
        assert_eq!(query.tags_any(), ["jazz"]);
        assert_eq!(
            query.properties().and_then(|p| p.get("genre")).map(String::as_str),
            Some("Action")
        );
        assert_eq!(query.rating_bounds(), (Some(2.5), Some(5.0)));
        assert_eq!(query.sort_by(), Some(SortKey::ViewCount));
        assert_eq!(query.sort_order(), SortOrder::Asc);
        assert_eq!(query.limit(), Some(10));
    }

    #[test]
    fn test_empty_object_is_empty_query() {
        let query = Query::from_json("{}").unwrap();
        assert!(query.is_empty());
        assert_eq!(query, Query::default());
    }

    #[test]
    fn test_null_same_as_absent() {
        let json = r#"{"platform": null, "tags": null, "sort_by": null, "limit": null}"#;
        let query = Query::from_json(json).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"platform": "vimeo", "shuffle_seed": 42, "ui": {"collapsed": true}}"#;
        let query = Query::from_json(json).unwrap();
        assert_eq!(query.platform(), Some("vimeo"));
    }

    #[test]
    fn test_unknown_sort_key_rejected() {
        let err = Query::from_json(r#"{"sort_by": "duration"}"#).unwrap_err();
        assert!(err.to_string().contains("decoding query"));
    }

    #[test]
    fn test_sort_order_defaults_to_desc() {
        let query = Query::from_json(r#"{"sort_by": "rating"}"#).unwrap();
        assert_eq!(query.sort_order(), SortOrder::Desc);
    }

    #[test]
    fn test_negative_limit_parses() {
        let query = Query::from_json(r#"{"limit": -1}"#).unwrap();
        assert_eq!(query.limit(), Some(-1));
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let query = Query::builder().platform("youtube").build();
        let json = query.to_json().unwrap();
        assert_eq!(json, r#"{"platform":"youtube"}"#);
        assert_eq!(Query::from_json(&json).unwrap(), query);
    }

    #[test]
    fn test_sort_key_names() {
        for key in [
            SortKey::AddedAt,
            SortKey::Title,
            SortKey::Rating,
            SortKey::ViewCount,
            SortKey::Random,
        ] {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }
}
