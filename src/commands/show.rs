//! Show command - print a snippet's raw code

use anyhow::Result;
use std::path::PathBuf;

use super::utils;

/// Execute the show command and return the snippet's code
pub fn execute(gallery_file: Option<PathBuf>, id: &str) -> Result<String> {
    let store = utils::open_store(gallery_file)?;
    let record = utils::resolve_record(store.list(), id)?;
    Ok(record.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_show_returns_raw_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gallery.json");

        let id = {
            let mut store = utils::open_store(Some(path.clone())).unwrap();
            store.create("Counter", "desc", "<p>raw</p>").unwrap().id
        };

        assert_eq!(execute(Some(path), &id).unwrap(), "<p>raw</p>");
    }
}
