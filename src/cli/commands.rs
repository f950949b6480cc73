//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Personal diary kept on your own disk", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Fields of the entry form
#[derive(Args, Debug)]
pub struct EntryFields {
    /// Entry title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Entry body
    #[arg(short, long)]
    pub content: Option<String>,

    /// Mood (bright, calm, reflective, stormy)
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Entry date (e.g., today, yesterday, last monday, 2025-01-17)
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Mood preselected for new entries
        #[arg(short, long, default_value = "calm")]
        mood: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Write a new entry
    Add {
        #[command(flatten)]
        fields: EntryFields,
    },

    /// Rewrite an entry; omitted fields keep their current values
    Edit {
        /// Entry id or unique prefix
        id: String,

        #[command(flatten)]
        fields: EntryFields,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry id or unique prefix
        id: String,
    },

    /// List entries, most recently changed first
    #[command(alias = "ls")]
    List {
        /// Only entries whose title or content contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only entries written for this date
        #[arg(short, long)]
        date: Option<String>,

        /// Print full entry ids
        #[arg(long)]
        full_ids: bool,
    },

    /// Show totals and mood mix
    Stats,
}
