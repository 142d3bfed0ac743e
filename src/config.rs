//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the directory that holds the gallery data file
/// - macOS: ~/Library/Application Support/snippet-gallery/
/// - Linux: ~/.local/share/snippet-gallery/
/// - Windows: %APPDATA%/snippet-gallery/
pub fn gallery_dir() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join("snippet-gallery"))
}

/// Get the default location of the gallery JSON file
pub fn gallery_file() -> Result<PathBuf> {
    Ok(gallery_dir()?.join("gallery.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve() {
        // These should not panic
        let _ = gallery_dir();
        let _ = gallery_file();
    }

    #[test]
    fn test_gallery_file_lives_in_gallery_dir() {
        let dir = gallery_dir().unwrap();
        let file = gallery_file().unwrap();
        assert!(file.starts_with(&dir));
        assert_eq!(file.file_name().unwrap(), "gallery.json");
    }
}
