//! Incremental construction of a [`Query`].

use std::collections::BTreeMap;

use super::{Query, SortKey, SortOrder};

/// Assembles a query field by field and emits the finished value.
///
/// Setting a field twice keeps the last value; tag and property setters
/// accumulate.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl From<Query> for QueryBuilder {
    fn from(query: Query) -> Self {
        Self { query }
    }
}

impl QueryBuilder {
    pub fn library(mut self, library_id: i64) -> Self {
        self.query.library_id = Some(library_id);
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.query.platform = Some(platform.into());
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.query.favorite = Some(favorite);
        self
    }

    /// Require a tag (all required tags must be present).
    pub fn tag(mut self, name: impl Into<String>) -> Self {
        self.query.tags.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    /// Add an alternative tag (at least one alternative must be present).
    pub fn any_tag(mut self, name: impl Into<String>) -> Self {
        self.query
            .tags_any
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// Require a property with exactly this value.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .properties
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.query.search = Some(text.into());
        self
    }

    pub fn min_rating(mut self, min: f64) -> Self {
        self.query.min_rating = Some(min);
        self
    }

    pub fn max_rating(mut self, max: f64) -> Self {
        self.query.max_rating = Some(max);
        self
    }

    /// Inclusive rating range.
    pub fn rating_between(self, min: f64, max: f64) -> Self {
        self.min_rating(min).max_rating(max)
    }

    pub fn sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.query.sort_by = Some(key);
        self.query.sort_order = Some(order);
        self
    }

    /// Sort by `key` in the default (descending) direction.
    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.query.sort_by = Some(key);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Drop any limit, e.g. when counting a stored query's full membership.
    pub fn unlimited(mut self) -> Self {
        self.query.limit = None;
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}
