//! JSON file persistence for the snippet gallery
//!
//! The whole collection lives in one file as a JSON array. Reads never fail:
//! anything unusable degrades to an empty collection and the caller decides
//! whether to seed. Writes replace the full array and propagate failures.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::record::SnippetRecord;
use super::store::GalleryError;

/// Persists the snippet collection as a JSON array at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The gallery file this adapter reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored collection
    ///
    /// A missing or unreadable file, corrupt JSON, and a non-array payload
    /// all yield an empty collection. Array elements that don't match the
    /// record shape (missing fields, wrong types) are dropped individually;
    /// elements with empty string fields are legacy data and are kept.
    pub fn load(&self) -> Vec<SnippetRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(_) => return Vec::new(),
        };

        let Value::Array(items) = parsed else {
            return Vec::new();
        };

        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()
    }

    /// Replace the stored collection with `records`
    ///
    /// Serializes the full sequence and overwrites any prior content.
    /// Creates the parent directory if needed.
    pub fn save(&self, records: &[SnippetRecord]) -> Result<(), GalleryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
