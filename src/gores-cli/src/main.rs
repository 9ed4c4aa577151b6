mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Votes { maps, types, json } => {
            commands::votes::handle(maps, types, json)?;
        }

        Commands::Sql { maps, output } => {
            commands::sql::handle(maps, &output)?;
        }

        Commands::Patch { types, targets, json } => {
            commands::patch::handle(types, targets, json)?;
        }

        Commands::Configure { maps, types, show } => {
            commands::configure::handle(maps.as_deref(), types.as_deref(), show)?;
        }
    }

    Ok(())
}
