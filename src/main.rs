//! treeselect CLI
//!
//! Usage: treeselect <COMMAND>
//!
//! Commands:
//!   show    Load a control, apply operations and print the selection
//!   pick    Pick items interactively

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::show::ShowOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            config,
            parents,
            children,
            search,
            select_all,
            clear_all,
        } => {
            let options = ShowOptions {
                parents,
                children,
                search,
                select_all,
                clear_all,
            };
            commands::show::cmd_show(&config, &options, cli.json, cli.verbose)
        }
        Commands::Pick { config } => commands::pick::cmd_pick(&config, cli.json, cli.verbose),
    }
}
