//! snippet-gallery library
//!
//! Core functionality for managing a local gallery of HTML/JS snippets:
//! a JSON-file-backed store with create/update/delete/list operations,
//! a projector for rendering layers, and a preview document compiler.
//!
//! Preview documents are produced without any sanitization and must only
//! be rendered inside an isolated sandbox.

pub mod config;
pub mod gallery;
