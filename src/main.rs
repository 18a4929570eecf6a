//! Riji - split one chronological diary document into linked static blog pages.

mod cli;
mod config;
mod extract;
mod listing;
mod logger;
mod render;
mod sync;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::Path;
use sync::sync_site;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Sync => sync_site(config),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: every field defaults to the target
/// site's layout, so the defaults alone are a complete configuration.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_root(root);
    config.validate()?;

    Ok(config)
}
