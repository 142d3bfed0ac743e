//! CLI commands

pub mod add;
pub mod edit;
pub mod list;
pub mod preview;
pub mod remove;
pub mod show;
pub mod utils;
