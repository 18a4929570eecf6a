//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Riji diary page generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory (where the diary and the generated pages live)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: riji.toml)
    #[arg(short = 'C', long, default_value = "riji.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Split the diary document and synchronize all generated pages
    Sync,
}

#[allow(unused)]
impl Cli {
    pub const fn is_sync(&self) -> bool {
        matches!(self.command, Commands::Sync)
    }
}
