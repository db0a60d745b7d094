use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jot", version)]
#[command(about = "Quick notes for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes and config (overrides JOT_HOME)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Minimum log level (trace, debug, info, warn, error); JOT_LOG also works
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note
    #[command(alias = "n")]
    Add {
        /// Title of the note (blank becomes "Untitled")
        title: String,

        /// Content of the note
        #[arg(default_value = "")]
        content: String,
    },

    /// List notes, newest first
    #[command(alias = "ls")]
    List,

    /// Change a note's title and/or content
    #[command(alias = "e")]
    Edit {
        /// Id of the note (as shown by `jot list`)
        id: String,

        /// New title (keeps the current one if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New content (keeps the current one if omitted)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Id of the note (as shown by `jot list`)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, confirm-deletes)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
