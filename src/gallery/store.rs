//! The canonical in-memory snippet collection, kept in sync with its file
//!
//! Every successful mutation triggers exactly one synchronous write of the
//! full collection through the persistence adapter. Validation and lookup
//! failures leave both the collection and the file untouched.

use thiserror::Error;

use super::persistence::JsonFileAdapter;
use super::record::{self, SnippetRecord};

/// Failures surfaced by store operations
#[derive(Debug, Error)]
pub enum GalleryError {
    /// A required field was empty at the create/update boundary
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    /// No record with the given id exists
    #[error("no snippet with id: {id}")]
    NotFound { id: String },

    /// The gallery file could not be written
    #[error("failed to write gallery file: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be serialized
    #[error("failed to serialize gallery: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Ordered collection of snippets backed by a JSON file
///
/// Construction via [`SnippetStore::initialize`] is the only way to obtain a
/// store, so every live store has already loaded (or seeded) its collection.
pub struct SnippetStore {
    records: Vec<SnippetRecord>,
    adapter: JsonFileAdapter,
}

impl SnippetStore {
    /// Load the stored collection, seeding it on first run
    ///
    /// When storage is empty or unusable the seed set replaces it and is
    /// immediately persisted. Re-initializing against non-empty storage
    /// re-loads; it never re-seeds.
    pub fn initialize(adapter: JsonFileAdapter) -> Result<Self, GalleryError> {
        let mut records = adapter.load();
        if records.is_empty() {
            records = record::seed_records();
            adapter.save(&records)?;
        }
        Ok(Self { records, adapter })
    }

    /// The current collection, most-recently-created first
    ///
    /// Updates do not move a record; only creation order matters.
    pub fn list(&self) -> &[SnippetRecord] {
        &self.records
    }

    /// Create a snippet and prepend it to the collection
    ///
    /// `name` and `description` are trimmed before the emptiness check;
    /// `code` is taken verbatim. Returns a clone of the stored record.
    pub fn create(
        &mut self,
        name: &str,
        description: &str,
        code: &str,
    ) -> Result<SnippetRecord, GalleryError> {
        let (name, description) = validate(name, description, code)?;

        let record = SnippetRecord::new(name, description, code.to_string());
        self.records.insert(0, record.clone());
        self.adapter.save(&self.records)?;
        Ok(record)
    }

    /// Replace a snippet's name, description, and code
    ///
    /// `created_at` and the record's position are unchanged; `updated_at` is
    /// refreshed. Returns a clone of the stored record.
    pub fn update(
        &mut self,
        id: &str,
        name: &str,
        description: &str,
        code: &str,
    ) -> Result<SnippetRecord, GalleryError> {
        let (name, description) = validate(name, description, code)?;

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| GalleryError::NotFound { id: id.to_string() })?;

        record.name = name;
        record.description = description;
        record.code = code.to_string();
        record.updated_at = record::now_millis();
        let updated = record.clone();

        self.adapter.save(&self.records)?;
        Ok(updated)
    }

    /// Remove a snippet, reporting whether anything was removed
    ///
    /// An absent id is a no-op: no error and no persistence write.
    pub fn delete(&mut self, id: &str) -> Result<bool, GalleryError> {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };

        self.records.remove(index);
        self.adapter.save(&self.records)?;
        Ok(true)
    }
}

/// Enforce the write-boundary emptiness rule
///
/// `name` and `description` come back trimmed; `code` keeps its whitespace
/// since snippets may legitimately begin or end with newlines.
fn validate(
    name: &str,
    description: &str,
    code: &str,
) -> Result<(String, String), GalleryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GalleryError::Validation { field: "name" });
    }

    let description = description.trim();
    if description.is_empty() {
        return Err(GalleryError::Validation { field: "description" });
    }

    if code.is_empty() {
        return Err(GalleryError::Validation { field: "code" });
    }

    Ok((name.to_string(), description.to_string()))
}
