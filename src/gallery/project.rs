//! DOM-free view model derived from the store state

use super::record::SnippetRecord;

/// What a rendering layer needs to draw one gallery row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub has_code: bool,
}

/// Project the collection into row summaries, preserving order
///
/// Pure function of the records passed in; carries no state of its own.
pub fn project(records: &[SnippetRecord]) -> Vec<SnippetSummary> {
    records
        .iter()
        .map(|record| SnippetSummary {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            has_code: !record.code.is_empty(),
        })
        .collect()
}
