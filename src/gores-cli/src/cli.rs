//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gores")]
#[command(about = "Gores server config generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate per-tier voting menus from the map directories
    #[command(visible_alias = "v")]
    Votes {
        /// Root directory containing one subdirectory of .map files per tier
        #[arg(short, long)]
        maps: Option<PathBuf>,

        /// Output directory for the generated tier config directories
        #[arg(short, long)]
        types: Option<PathBuf>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the SQL import script for the points table
    #[command(visible_alias = "s")]
    Sql {
        /// Root directory containing one subdirectory of .map files per tier
        #[arg(short, long)]
        maps: Option<PathBuf>,

        /// Output file for the import script
        #[arg(short, long, default_value = "insert-gores-maps.sql")]
        output: PathBuf,
    },

    /// Splice the Gores switch entry into the stock DDNet menus
    #[command(visible_alias = "p")]
    Patch {
        /// Directory containing the stock type directories
        #[arg(short, long)]
        types: Option<PathBuf>,

        /// Type directories to patch instead of the stock set
        #[arg(value_name = "TYPE")]
        targets: Vec<String>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default maps directory
        #[arg(long)]
        maps: Option<PathBuf>,

        /// Set the default types directory
        #[arg(long)]
        types: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
