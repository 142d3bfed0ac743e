//! Core snippet gallery operations

pub mod persistence;
pub mod preview;
pub mod project;
pub mod record;
pub mod store;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use persistence::JsonFileAdapter;
#[allow(unused_imports)]
pub use preview::build_preview;
#[allow(unused_imports)]
pub use project::{project, SnippetSummary};
#[allow(unused_imports)]
pub use record::{seed_records, SnippetRecord};
#[allow(unused_imports)]
pub use store::{GalleryError, SnippetStore};
