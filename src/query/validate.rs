//! Optional boundary checks for queries.
//!
//! The evaluator never calls these; it evaluates whatever it is given.
//! Form layers and the CLI's `--strict` mode use them to reject queries
//! that would silently produce empty or surprising results.

use std::fmt;

use super::Query;
use crate::error::{Error, Result};

/// Highest rating on the conventional scale.
pub const MAX_RATING: f64 = 5.0;

/// A suspicious but evaluable query field.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryIssue {
    /// `min_rating` above `max_rating`, nothing can match
    InvertedRatingRange { min: f64, max: f64 },
    /// Rating bound outside 0.0 - 5.0
    RatingOutOfRange { field: &'static str, value: f64 },
    /// Negative limit, evaluated as unbounded
    NegativeLimit(i64),
    /// Whitespace-only search text, ignored
    BlankSearch,
    /// `tags_any` given but empty, ignored
    EmptyTagsAny,
    /// `sort_order` without `sort_by`, ignored
    OrderWithoutSortKey,
}

impl fmt::Display for QueryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryIssue::InvertedRatingRange { min, max } => {
                write!(f, "min_rating {} is greater than max_rating {}", min, max)
            }
            QueryIssue::RatingOutOfRange { field, value } => {
                write!(f, "{} {} is outside 0-{}", field, value, MAX_RATING)
            }
            QueryIssue::NegativeLimit(limit) => write!(f, "limit {} is negative", limit),
            QueryIssue::BlankSearch => write!(f, "search text is blank"),
            QueryIssue::EmptyTagsAny => write!(f, "tags_any is empty"),
            QueryIssue::OrderWithoutSortKey => write!(f, "sort_order given without sort_by"),
        }
    }
}

impl Query {
    /// List every suspicious field. An empty list means the query is clean.
    pub fn validate(&self) -> Vec<QueryIssue> {
        let mut issues = Vec::new();

        for (field, bound) in [("min_rating", self.min_rating), ("max_rating", self.max_rating)] {
            if let Some(value) = bound {
                if !(0.0..=MAX_RATING).contains(&value) {
                    issues.push(QueryIssue::RatingOutOfRange { field, value });
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_rating, self.max_rating) {
            if min > max {
                issues.push(QueryIssue::InvertedRatingRange { min, max });
            }
        }

        if let Some(limit) = self.limit {
            if limit < 0 {
                issues.push(QueryIssue::NegativeLimit(limit));
            }
        }

        if let Some(ref search) = self.search {
            if search.trim().is_empty() {
                issues.push(QueryIssue::BlankSearch);
            }
        }

        if self.tags_any.as_ref().is_some_and(|t| t.is_empty()) {
            issues.push(QueryIssue::EmptyTagsAny);
        }

        if self.sort_order.is_some() && self.sort_by.is_none() {
            issues.push(QueryIssue::OrderWithoutSortKey);
        }

        issues
    }

    /// Fail with [`Error::InvalidQuery`] if [`validate`](Self::validate) reports anything.
    pub fn ensure_valid(&self) -> Result<()> {
        let issues = self.validate();
        if issues.is_empty() {
            return Ok(());
        }
        let message = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::invalid_query(message))
    }
}
