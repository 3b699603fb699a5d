use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// treeselect - hierarchical selection control for the terminal
#[derive(Parser, Debug)]
#[command(name = "treeselect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a control, apply operations and print the selection
    Show {
        /// Control config (.toml or .json)
        config: PathBuf,

        /// Parent ids to select (comma-separated)
        #[arg(long = "parent", value_delimiter = ',')]
        parents: Vec<String>,

        /// Child ids to select (comma-separated)
        #[arg(long = "child", value_delimiter = ',')]
        children: Vec<String>,

        /// Filter visible items before bulk operations
        #[arg(long)]
        search: Option<String>,

        /// Select every visible item
        #[arg(long, conflicts_with = "clear_all")]
        select_all: bool,

        /// Clear every visible item
        #[arg(long)]
        clear_all: bool,
    },

    /// Pick items interactively
    Pick {
        /// Control config (.toml or .json)
        config: PathBuf,
    },
}
