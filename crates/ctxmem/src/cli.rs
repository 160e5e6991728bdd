//! CLI argument definitions using clap derive macros.
//!
//! The CLI stands in for the editor: `--file` and `--line` describe the
//! focused document and cursor for the command being run.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Code Context Memory CLI
///
/// Attach notes to source lines and get reminded when you come back.
#[derive(Parser, Debug)]
#[command(name = "ctxmem")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Focused file and cursor.
#[derive(Args, Debug, Clone)]
pub struct CursorArgs {
    /// File open in the editor (omit to simulate no active editor)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Cursor line, 1-based
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub line: u32,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note at the cursor line
    Add {
        #[command(flatten)]
        cursor: CursorArgs,

        /// Note text (prompted when omitted)
        text: Option<String>,
    },

    /// Pick one of the file's notes and jump to it
    View {
        #[command(flatten)]
        cursor: CursorArgs,
    },

    /// Delete the note at the cursor line
    Delete {
        #[command(flatten)]
        cursor: CursorArgs,
    },

    /// Open a note by ID
    Open {
        /// Note ID
        id: String,
    },

    /// Show hover text for the cursor line
    Hover {
        #[command(flatten)]
        cursor: CursorArgs,
    },

    /// List gutter markers of a file
    Marks {
        /// File to decorate
        file: PathBuf,
    },

    /// Show the status bar summary for a file
    Status {
        /// File to summarize
        file: PathBuf,
    },

    /// Show all notes grouped by file
    Tree,

    /// Focus a file in the editor (records access, may show a reminder)
    Focus {
        #[command(flatten)]
        cursor: CursorArgs,
    },

    /// List notes not viewed in a while and revisit one
    Stale,

    /// Keep checking the focused file and show reminders until Ctrl-C
    Watch {
        #[command(flatten)]
        cursor: CursorArgs,

        /// Check interval in seconds (defaults to config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Show version
    Version,
}
