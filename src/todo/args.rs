use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// `--version` text, assembled by `build.rs`. Dev builds append `@hash date`.
const LONG_VERSION: &str = env!("TODO_LONG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "todo", version = LONG_VERSION)]
#[command(about = "A small to-do list with short-id lookup", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Use this directory for data instead of the default (also: TODO_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new to-do
    #[command(visible_alias = "a", alias = "new")]
    Add {
        /// Text of the to-do (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List to-dos (default)
    #[command(alias = "ls")]
    List {
        /// Only pending to-dos
        #[arg(long, conflicts_with = "completed")]
        pending: bool,

        /// Only completed to-dos
        #[arg(long)]
        completed: bool,
    },

    /// Show a single to-do
    #[command(alias = "s")]
    Show {
        /// Id or id prefix (at least 3 characters)
        id: String,
    },

    /// Replace the text of a to-do
    #[command(visible_alias = "e", alias = "update")]
    Edit {
        /// Id or id prefix (at least 3 characters)
        id: String,

        /// New text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Flip a to-do between pending and completed
    #[command(visible_alias = "t")]
    Toggle {
        /// Id or id prefix (at least 3 characters)
        id: String,
    },

    /// Mark a to-do as completed
    #[command(visible_alias = "x")]
    Done {
        /// Id or id prefix (at least 3 characters)
        id: String,
    },

    /// Mark a to-do as pending again
    Undone {
        /// Id or id prefix (at least 3 characters)
        id: String,
    },

    /// Delete a to-do
    #[command(visible_alias = "d", alias = "delete")]
    Rm {
        /// Id or id prefix (at least 3 characters)
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. backend)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
