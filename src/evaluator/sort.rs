//! Ordering of matched entries.

use rand::seq::SliceRandom;
use std::cmp::Ordering;

use crate::model::Entry;
use crate::query::{SortKey, SortOrder};

/// Total order over optional ratings: absent sorts below every value.
///
/// Shared by the rating range filter and the rating sort so unrated entries
/// are handled the same way in both places. Signed zeros compare equal.
pub fn cmp_rating(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        // Adding 0.0 folds -0.0 into 0.0 before the total order
        (Some(a), Some(b)) => (a + 0.0).total_cmp(&(b + 0.0)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending comparison of two entries on a deterministic key.
///
/// `Random` compares equal; callers shuffle instead of sorting.
pub fn compare(key: SortKey, a: &Entry, b: &Entry) -> Ordering {
    match key {
        SortKey::AddedAt => a.created_at.cmp(&b.created_at),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Rating => cmp_rating(a.rating, b.rating),
        SortKey::ViewCount => a.view_count.cmp(&b.view_count),
        SortKey::Random => Ordering::Equal,
    }
}

/// Order `entries` in place.
///
/// Deterministic keys use a stable sort, so ties keep their input order in
/// either direction. `Random` ignores `order`.
pub fn sort_entries(entries: &mut [&Entry], key: SortKey, order: SortOrder) {
    if key == SortKey::Random {
        entries.shuffle(&mut rand::rng());
        return;
    }

    entries.sort_by(|a, b| {
        let cmp = compare(key, a, b);
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
}
