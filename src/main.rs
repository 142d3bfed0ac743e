//! snippet-gallery: manage a local gallery of HTML/JS snippets
//!
//! Snippets live in one JSON file under the platform data directory and can
//! be compiled into standalone preview documents for sandboxed rendering.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod gallery;

#[derive(Parser)]
#[command(name = "snippet-gallery")]
#[command(about = "Manage a local gallery of HTML/JS snippets", long_about = None)]
#[command(version)]
struct Cli {
    /// Gallery file to operate on (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all snippets in the gallery
    List {
        /// Show the full snippet ID for each row
        #[arg(long)]
        with_id: bool,

        /// Sort by: name, created, updated (default: created)
        #[arg(long, short, default_value = "created")]
        sort: String,

        /// Reverse sort order
        #[arg(long, short)]
        reverse: bool,

        /// Only show snippets whose name or description matches
        #[arg(long, short)]
        filter: Option<String>,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Add a new snippet
    Add {
        /// Display name
        name: String,

        /// Short description
        #[arg(long = "desc")]
        description: String,

        /// Snippet code, inline
        #[arg(long, conflicts_with = "code_file")]
        code: Option<String>,

        /// Read snippet code from a file
        #[arg(long)]
        code_file: Option<PathBuf>,
    },

    /// Edit an existing snippet (omitted fields keep their current value)
    Edit {
        /// Snippet ID, or any unambiguous prefix of it
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long = "desc")]
        description: Option<String>,

        /// New snippet code, inline
        #[arg(long, conflicts_with = "code_file")]
        code: Option<String>,

        /// Read new snippet code from a file
        #[arg(long)]
        code_file: Option<PathBuf>,
    },

    /// Remove a snippet
    Remove {
        /// Snippet ID, or any unambiguous prefix of it
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print a snippet's raw code
    Show {
        /// Snippet ID, or any unambiguous prefix of it
        id: String,
    },

    /// Compile a snippet into a standalone HTML preview document
    Preview {
        /// Snippet ID, or any unambiguous prefix of it
        id: String,

        /// Output file (prints to stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            with_id,
            sort,
            reverse,
            filter,
            limit,
        } => {
            let options = commands::list::ListOptions {
                with_id,
                sort,
                reverse,
                filter,
                limit,
            };
            let output = commands::list::execute(cli.file, options)?;
            println!("{}", output);
        }

        Commands::Add {
            name,
            description,
            code,
            code_file,
        } => {
            commands::add::execute(cli.file, &name, &description, code, code_file.as_deref())?;
        }

        Commands::Edit {
            id,
            name,
            description,
            code,
            code_file,
        } => {
            commands::edit::execute(
                cli.file,
                &id,
                name,
                description,
                code,
                code_file.as_deref(),
            )?;
        }

        Commands::Remove { id, yes } => {
            commands::remove::execute(cli.file, &id, yes)?;
        }

        Commands::Show { id } => {
            let code = commands::show::execute(cli.file, &id)?;
            println!("{}", code);
        }

        Commands::Preview { id, output } => {
            commands::preview::execute(cli.file, &id, output.as_deref())?;
        }
    }

    Ok(())
}
