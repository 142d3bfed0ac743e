//! Preview command - compile a snippet into a standalone HTML document

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::utils;
use crate::gallery::build_preview;

/// Execute the preview command
///
/// Writes the compiled document to `output` when given, otherwise prints it
/// to stdout. The document is meant for an isolated sandbox; nothing here
/// opens or executes it.
pub fn execute(gallery_file: Option<PathBuf>, id: &str, output: Option<&Path>) -> Result<()> {
    let store = utils::open_store(gallery_file)?;
    let record = utils::resolve_record(store.list(), id)?;

    let document = build_preview(&record.code);

    match output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("Failed to write: {}", path.display()))?;
            println!(
                "{} preview of {} to {}",
                "Wrote:".green(),
                record.name,
                path.display()
            );
        }
        None => {
            println!("{}", document);
        }
    }

    Ok(())
}
