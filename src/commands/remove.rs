//! Remove command - delete a snippet from the gallery

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::PathBuf;

use super::utils;

/// Execute the remove command
pub fn execute(gallery_file: Option<PathBuf>, id: &str, yes: bool) -> Result<()> {
    let mut store = utils::open_store(gallery_file)?;
    let record = utils::resolve_record(store.list(), id)?;

    if !yes {
        print!("Remove '{}'? (y/N) ", record.name);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if store.delete(&record.id)? {
        println!("{} {} ({})", "Removed:".green(), record.name, record.id);
    } else {
        println!("{}", "Nothing to remove.".yellow());
    }

    Ok(())
}
