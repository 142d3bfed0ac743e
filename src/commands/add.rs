//! Add command - create a new snippet

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use super::utils;

/// Execute the add command
pub fn execute(
    gallery_file: Option<PathBuf>,
    name: &str,
    description: &str,
    code: Option<String>,
    code_file: Option<&Path>,
) -> Result<()> {
    let code = utils::read_code(code, code_file)?
        .context("Provide snippet code via --code or --code-file")?;

    let mut store = utils::open_store(gallery_file)?;
    let record = store.create(name, description, &code)?;

    println!("{} {} ({})", "Added:".green(), record.name, record.id);
    Ok(())
}
