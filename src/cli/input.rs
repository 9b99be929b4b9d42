//! Reading queries and entry snapshots from files or stdin.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result, ResultExt};
use crate::model::Entry;
use crate::query::Query;

/// Read a whole file, or stdin when `path` is `-`.
pub fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .with_context("reading stdin")?;
        return Ok(text);
    }

    if !path.exists() {
        return Err(Error::not_found(path));
    }
    std::fs::read_to_string(path).with_context(format!("reading {}", path.display()))
}

/// Read a stored query.
pub fn read_query(path: &Path) -> Result<Query> {
    Query::from_json(&read_text(path)?).with_context(format!("query file {}", path.display()))
}

/// Read an entry snapshot (a JSON array of entries).
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let text = read_text(path)?;
    let entries: Vec<Entry> =
        serde_json::from_str(&text).with_context(format!("entries file {}", path.display()))?;
    tracing::debug!(count = entries.len(), "Loaded entries from {:?}", path);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_query_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.json");
        std::fs::write(&path, r#"{"platform": "youtube", "limit": 2}"#).unwrap();

        let query = read_query(&path).unwrap();
        assert_eq!(query.platform(), Some("youtube"));
        assert_eq!(query.limit(), Some(2));
    }

    #[test]
    fn test_read_entries_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "title": "One", "created_at": "2024-01-01T00:00:00Z"},
                {"id": 2, "title": "Two", "created_at": "2024-01-02T00:00:00Z", "favorite": true}
            ]"#,
        )
        .unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[1].favorite);
    }

    #[test]
    fn test_missing_file() {
        let err = read_text(&PathBuf::from("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_malformed_query_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"sort_by": "loudness"}"#).unwrap();

        let err = read_query(&path).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }
}
