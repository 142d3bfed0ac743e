//! List command - show the snippet gallery

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::PathBuf;

use super::utils;
use crate::gallery::{project, SnippetRecord};

/// Options for the list command
pub struct ListOptions {
    /// Show the full snippet id for each row
    pub with_id: bool,
    /// Sort by: name, created, updated
    pub sort: String,
    /// Reverse sort order
    pub reverse: bool,
    /// Pattern to match against name or description
    pub filter: Option<String>,
    /// Limit number of results
    pub limit: Option<usize>,
}

/// Execute the list command and return formatted output
pub fn execute(gallery_file: Option<PathBuf>, options: ListOptions) -> Result<String> {
    let store = utils::open_store(gallery_file)?;
    let mut records: Vec<SnippetRecord> = store.list().to_vec();

    // Apply filter
    if let Some(ref filter_str) = options.filter {
        let needle = filter_str.to_lowercase();
        records.retain(|r| {
            r.name.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
        });
    }

    // Apply sorting
    match options.sort.as_str() {
        "name" => {
            records.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        "updated" => {
            records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        }
        _ => {
            // Default (including "created"): keep store order, newest first
        }
    }

    // Reverse if requested
    if options.reverse {
        records.reverse();
    }

    // Apply limit
    let total_count = records.len();
    if let Some(n) = options.limit {
        records.truncate(n);
    }

    // Rows come from the projector; timestamps from the matching records
    let summaries = project(&records);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![];
    if options.with_id {
        header.push(Cell::new("ID"));
    }
    header.push(Cell::new("Name"));
    header.push(Cell::new("Description"));
    header.push(Cell::new("Code"));
    header.push(Cell::new("Updated"));
    table.set_header(header);

    for (summary, record) in summaries.iter().zip(&records) {
        let mut row = vec![];
        if options.with_id {
            row.push(Cell::new(&summary.id));
        }
        row.push(Cell::new(&summary.name));
        row.push(Cell::new(utils::truncate(&summary.description, 48)));
        row.push(Cell::new(if summary.has_code { "yes" } else { "-" }));
        row.push(Cell::new(utils::format_timestamp(record.updated_at)));
        table.add_row(row);
    }

    // Build output
    let mut output = table.to_string();
    if summaries.len() < total_count {
        output.push_str(&format!(
            "\n\nShowing {} of {} snippets",
            summaries.len(),
            total_count
        ));
    } else {
        output.push_str(&format!("\n\n{} snippets", total_count));
    }

    Ok(output)
}
