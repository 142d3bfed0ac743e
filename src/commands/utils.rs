//! Shared utilities for commands

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::gallery::{JsonFileAdapter, SnippetRecord, SnippetStore};

/// Open the gallery store at the given path, or the default location
pub fn open_store(gallery_file: Option<PathBuf>) -> Result<SnippetStore> {
    let path = match gallery_file {
        Some(path) => path,
        None => config::gallery_file().context("Failed to determine gallery file location")?,
    };
    SnippetStore::initialize(JsonFileAdapter::new(path)).context("Failed to open gallery")
}

/// Resolve a full id or unambiguous id prefix to its record
pub fn resolve_record(records: &[SnippetRecord], id_or_prefix: &str) -> Result<SnippetRecord> {
    if let Some(exact) = records.iter().find(|r| r.id == id_or_prefix) {
        return Ok(exact.clone());
    }

    let matches: Vec<&SnippetRecord> = records
        .iter()
        .filter(|r| r.id.starts_with(id_or_prefix))
        .collect();

    match matches.as_slice() {
        [] => bail!("No snippet matches id '{}'", id_or_prefix),
        [one] => Ok((*one).clone()),
        many => bail!(
            "Id prefix '{}' is ambiguous ({} matches)",
            id_or_prefix,
            many.len()
        ),
    }
}

/// Read snippet code from an inline argument or a file
///
/// Returns `None` when neither source was given; the caller decides whether
/// that is an error (add) or "keep the current code" (edit).
pub fn read_code(code: Option<String>, code_file: Option<&Path>) -> Result<Option<String>> {
    match (code, code_file) {
        (Some(code), None) => Ok(Some(code)),
        (None, Some(path)) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read: {}", path.display()))?;
            Ok(Some(content))
        }
        (None, None) => Ok(None),
        (Some(_), Some(_)) => {
            // This case is prevented by clap's conflicts_with
            unreachable!()
        }
    }
}

/// Format an epoch-milliseconds timestamp for table display
pub fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Truncate long cell content for table display
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(id: &str) -> SnippetRecord {
        SnippetRecord {
            id: id.to_string(),
            name: "n".to_string(),
            description: "d".to_string(),
            code: "c".to_string(),
            created_at: 1,
            updated_at: 1,
        }
    }

    #[test]
    fn test_resolve_exact_id() {
        let records = vec![record("abc123"), record("abd456")];
        assert_eq!(resolve_record(&records, "abc123").unwrap().id, "abc123");
    }

    #[test]
    fn test_resolve_unambiguous_prefix() {
        let records = vec![record("abc123"), record("xyz789")];
        assert_eq!(resolve_record(&records, "ab").unwrap().id, "abc123");
    }

    #[test]
    fn test_resolve_ambiguous_prefix_fails() {
        let records = vec![record("abc123"), record("abd456")];
        assert!(resolve_record(&records, "ab").is_err());
    }

    #[test]
    fn test_resolve_unknown_id_fails() {
        let records = vec![record("abc123")];
        assert!(resolve_record(&records, "zz").is_err());
    }

    #[test]
    fn test_exact_id_wins_over_prefix_ambiguity() {
        // "abc" is both a full id and a prefix of "abcdef"
        let records = vec![record("abc"), record("abcdef")];
        assert_eq!(resolve_record(&records, "abc").unwrap().id, "abc");
    }

    #[test]
    fn test_read_code_inline() {
        assert_eq!(
            read_code(Some("<p/>".to_string()), None).unwrap(),
            Some("<p/>".to_string())
        );
    }

    #[test]
    fn test_read_code_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snippet.html");
        fs::write(&path, "<button></button>").unwrap();
        assert_eq!(
            read_code(None, Some(&path)).unwrap(),
            Some("<button></button>".to_string())
        );
    }

    #[test]
    fn test_read_code_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(read_code(None, Some(&dir.path().join("missing.html"))).is_err());
    }

    #[test]
    fn test_read_code_neither_source() {
        assert_eq!(read_code(None, None).unwrap(), None);
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        let out = truncate("a very long description indeed", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_format_timestamp() {
        // 2021-01-01 00:00:00 UTC
        assert_eq!(format_timestamp(1_609_459_200_000), "2021-01-01 00:00");
    }
}
