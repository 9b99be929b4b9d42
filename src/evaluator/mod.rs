//! Dynamic playlist query evaluation.
//!
//! [`evaluate`] applies a [`Query`] to a snapshot of entries and returns the
//! matching entries in order, plus the number of matches before the limit.
//! It is a pure function: no I/O, no shared state, inputs are only read.
//!
//! Filters run in a fixed order, cheap checks first:
//! 1. `library_id`, `platform`, `favorite` (exact match)
//! 2. `min_rating` / `max_rating` (inclusive, unrated entries never match)
//! 3. `tags` (all required) and `tags_any` (at least one)
//! 4. `properties` (every key present with the identical value)
//! 5. `search` (case-insensitive substring of the title)
//!
//! The survivors are counted, sorted, then truncated to `limit`.
//!
//! Malformed values are evaluated literally rather than rejected. A
//! negative `limit` is unbounded, an inverted rating range matches
//! nothing, and an empty `tags_any` or blank `search` is ignored.
//!
//! `sort_by: random` shuffles with an unseeded RNG, so its order differs
//! between calls while the matched set stays the same.

mod sort;

pub use sort::{cmp_rating, compare};

use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

use crate::config::SearchConfig;
use crate::model::Entry;
use crate::query::Query;

/// Which entry fields the free-text search looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    Title,
    TitleAndDescription,
}

/// Matched entries plus the limit-independent match count.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    /// Sorted and limited matches
    pub entries: Vec<&'a Entry>,
    /// Number of entries passing every filter, ignoring `limit`
    pub total_count: usize,
}

impl QueryResult<'_> {
    /// IDs of the returned entries, in result order.
    pub fn ids(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Query evaluator with a configurable search scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    search_scope: SearchScope,
}

impl Evaluator {
    pub fn new(search_scope: SearchScope) -> Self {
        Self { search_scope }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        if config.include_description {
            Self::new(SearchScope::TitleAndDescription)
        } else {
            Self::new(SearchScope::Title)
        }
    }

    pub fn search_scope(&self) -> SearchScope {
        self.search_scope
    }

    /// Filter, sort and limit `entries` according to `query`.
    pub fn evaluate<'a, I>(&self, query: &Query, entries: I) -> QueryResult<'a>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let filter = Filter::new(query, self.search_scope);

        let mut candidates = 0usize;
        let mut matched: Vec<&'a Entry> = entries
            .into_iter()
            .inspect(|_| candidates += 1)
            .filter(|entry| filter.matches(entry))
            .collect();
        let total_count = matched.len();

        if let Some(key) = query.sort_by() {
            sort::sort_entries(&mut matched, key, query.sort_order());
        }

        if let Some(limit) = query.limit() {
            // Negative limits do not convert and stay unbounded
            if let Ok(limit) = usize::try_from(limit) {
                matched.truncate(limit);
            }
        }

        debug!(
            candidates,
            matched = total_count,
            returned = matched.len(),
            sort_by = ?query.sort_by(),
            "Evaluated dynamic query"
        );

        QueryResult {
            entries: matched,
            total_count,
        }
    }
}

/// Evaluate `query` with the default (title-only) search scope.
pub fn evaluate<'a, I>(query: &Query, entries: I) -> QueryResult<'a>
where
    I: IntoIterator<Item = &'a Entry>,
{
    Evaluator::default().evaluate(query, entries)
}

/// Per-call view of a query with search text and tag lists normalized.
struct Filter<'q> {
    library_id: Option<i64>,
    platform: Option<&'q str>,
    favorite: Option<bool>,
    min_rating: Option<f64>,
    max_rating: Option<f64>,
    tags: &'q [String],
    tags_any: &'q [String],
    properties: Option<&'q BTreeMap<String, String>>,
    needle: Option<String>,
    scope: SearchScope,
}

impl<'q> Filter<'q> {
    fn new(query: &'q Query, scope: SearchScope) -> Self {
        let (min_rating, max_rating) = query.rating_bounds();
        let needle = query
            .search()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        Self {
            library_id: query.library_id(),
            platform: query.platform(),
            favorite: query.favorite(),
            min_rating,
            max_rating,
            tags: query.tags(),
            tags_any: query.tags_any(),
            properties: query.properties(),
            needle,
            scope,
        }
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.matches_exact(entry)
            && self.matches_rating(entry)
            && self.matches_tags(entry)
            && self.matches_properties(entry)
            && self.matches_search(entry)
    }

    fn matches_exact(&self, entry: &Entry) -> bool {
        if let Some(library_id) = self.library_id {
            if entry.library_id != Some(library_id) {
                return false;
            }
        }
        if let Some(platform) = self.platform {
            if entry.platform.as_deref() != Some(platform) {
                return false;
            }
        }
        if let Some(favorite) = self.favorite {
            if entry.favorite != favorite {
                return false;
            }
        }
        true
    }

    fn matches_rating(&self, entry: &Entry) -> bool {
        if self.min_rating.is_none() && self.max_rating.is_none() {
            return true;
        }
        if entry.rating.is_none() {
            return false;
        }
        let above_min = self
            .min_rating
            .is_none_or(|min| cmp_rating(entry.rating, Some(min)) != Ordering::Less);
        let below_max = self
            .max_rating
            .is_none_or(|max| cmp_rating(entry.rating, Some(max)) != Ordering::Greater);
        above_min && below_max
    }

    fn matches_tags(&self, entry: &Entry) -> bool {
        if self.tags.is_empty() && self.tags_any.is_empty() {
            return true;
        }
        let effective = entry.effective_tags();
        let has_all = self.tags.iter().all(|t| effective.contains(t.as_str()));
        let has_any =
            self.tags_any.is_empty() || self.tags_any.iter().any(|t| effective.contains(t.as_str()));
        has_all && has_any
    }

    fn matches_properties(&self, entry: &Entry) -> bool {
        let Some(properties) = self.properties else {
            return true;
        };
        properties
            .iter()
            .all(|(key, value)| entry.properties.get(key) == Some(value))
    }

    fn matches_search(&self, entry: &Entry) -> bool {
        let Some(ref needle) = self.needle else {
            return true;
        };
        if entry.title.to_lowercase().contains(needle.as_str()) {
            return true;
        }
        match self.scope {
            SearchScope::Title => false,
            SearchScope::TitleAndDescription => entry
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle.as_str())),
        }
    }
}
