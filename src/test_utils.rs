//! Test utilities and fixtures for mediashelf tests.
//!
//! Provides entry factories so tests only spell out the fields they care
//! about. Customize with struct update syntax:
//!
//! ```ignore
//! use mediashelf::test_utils::mock_entry;
//!
//! let entry = Entry {
//!     platform: Some("vimeo".to_string()),
//!     ..mock_entry(3)
//! };
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::model::{AutoTag, Entry, Tag, UserTag};

/// Base timestamp all fixtures are offset from.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Creates a mock Entry with sensible defaults.
///
/// `created_at` increases with `id` (one minute apart), there are no tags,
/// no properties and no rating.
pub fn mock_entry(id: i64) -> Entry {
    Entry {
        id,
        library_id: Some(1),
        title: format!("Entry {}", id),
        description: None,
        platform: Some("youtube".to_string()),
        favorite: false,
        rating: None,
        created_at: base_time() + Duration::minutes(id),
        view_count: 0,
        auto_tags: Vec::new(),
        user_tags: Vec::new(),
        properties: Default::default(),
    }
}

/// Creates a mock Entry carrying the given tag names as auto tags.
pub fn tagged_entry(id: i64, tags: &[&str]) -> Entry {
    let auto_tags = tags
        .iter()
        .enumerate()
        .map(|(i, name)| AutoTag {
            tag: Tag::new(i as i64 + 1, *name),
            confidence: 0.9,
        })
        .collect();
    Entry {
        auto_tags,
        ..mock_entry(id)
    }
}

/// Creates a mock Entry carrying the given tag names as user tags.
pub fn user_tagged_entry(id: i64, tags: &[&str]) -> Entry {
    let user_tags = tags
        .iter()
        .enumerate()
        .map(|(i, name)| UserTag {
            tag: Tag::new(i as i64 + 100, *name),
            priority: i as i32,
        })
        .collect();
    Entry {
        user_tags,
        ..mock_entry(id)
    }
}

/// Creates a mock Entry with a rating.
pub fn rated_entry(id: i64, rating: Option<f64>) -> Entry {
    Entry {
        rating,
        ..mock_entry(id)
    }
}

/// Creates a mock Entry with the given properties.
pub fn entry_with_properties(id: i64, props: &[(&str, &str)]) -> Entry {
    Entry {
        properties: props
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        ..mock_entry(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_entry_defaults() {
        let entry = mock_entry(4);
        assert_eq!(entry.id, 4);
        assert_eq!(entry.title, "Entry 4");
        assert_eq!(entry.rating, None);
        assert!(entry.effective_tags().is_empty());
    }

    #[test]
    fn test_mock_entries_ordered_by_creation() {
        assert!(mock_entry(1).created_at < mock_entry(2).created_at);
    }

    #[test]
    fn test_tagged_entries() {
        let auto = tagged_entry(1, &["a", "b"]);
        let user = user_tagged_entry(2, &["c"]);
        assert_eq!(auto.auto_tags.len(), 2);
        assert!(user.effective_tags().contains("c"));
    }

    #[test]
    fn test_entry_with_properties() {
        let entry = entry_with_properties(1, &[("genre", "Action")]);
        assert_eq!(entry.property("genre"), Some("Action"));
    }
}
