//! Edit command - modify an existing snippet
//!
//! The store's update is a full replacement of name/description/code, so
//! omitted flags are filled in from the current record before the call.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use super::utils;

/// Execute the edit command
pub fn execute(
    gallery_file: Option<PathBuf>,
    id: &str,
    name: Option<String>,
    description: Option<String>,
    code: Option<String>,
    code_file: Option<&Path>,
) -> Result<()> {
    let mut store = utils::open_store(gallery_file)?;
    let current = utils::resolve_record(store.list(), id)?;

    let name = name.unwrap_or_else(|| current.name.clone());
    let description = description.unwrap_or_else(|| current.description.clone());
    let code = utils::read_code(code, code_file)?.unwrap_or_else(|| current.code.clone());

    let updated = store.update(&current.id, &name, &description, &code)?;

    println!("{} {} ({})", "Updated:".green(), updated.name, updated.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_edit_merges_omitted_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.json");

        let id = {
            let mut store = utils::open_store(Some(path.clone())).unwrap();
            store.create("Original", "desc", "<p/>").unwrap().id
        };

        execute(
            Some(path.clone()),
            &id,
            Some("Renamed".to_string()),
            None,
            None,
            None,
        )
        .unwrap();

        let store = utils::open_store(Some(path)).unwrap();
        let record = store.list().iter().find(|r| r.id == id).unwrap();
        assert_eq!(record.name, "Renamed");
        assert_eq!(record.description, "desc");
        assert_eq!(record.code, "<p/>");
    }

    #[test]
    fn test_edit_accepts_id_prefix() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.json");

        let id = {
            let mut store = utils::open_store(Some(path.clone())).unwrap();
            store.create("Original", "desc", "<p/>").unwrap().id
        };

        execute(
            Some(path.clone()),
            &id[..8],
            None,
            Some("new desc".to_string()),
            None,
            None,
        )
        .unwrap();

        let store = utils::open_store(Some(path)).unwrap();
        let record = store.list().iter().find(|r| r.id == id).unwrap();
        assert_eq!(record.description, "new desc");
    }

    #[test]
    fn test_edit_unknown_id_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.json");
        // Touch the gallery so the seed ids exist, then use a bogus id
        utils::open_store(Some(path.clone())).unwrap();

        assert!(execute(Some(path), "zzzz", None, None, None, None).is_err());
    }
}
