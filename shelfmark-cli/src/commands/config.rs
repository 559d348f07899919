//! The `config` subcommand.

use crate::error::CliError;
use clap::Subcommand;
use shelfmark::config::{config_file_path, ConfigFile};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration and where it comes from
    Show,
    /// Create the config file with default values if it does not exist
    Init,
}

pub fn run(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => show(),
        ConfigAction::Init => init(),
    }
}

fn show() -> Result<(), CliError> {
    let path = config_file_path();
    let config = ConfigFile::load().map_err(|e| CliError::Config(e.to_string()))?;

    if path.exists() {
        println!("Config file: {}", path.display());
    } else {
        println!("Config file: {} (not present, using defaults)", path.display());
    }
    println!("[feed]");
    println!(
        "url = {}",
        if config.feed.url.is_empty() {
            "(not set)"
        } else {
            config.feed.url.as_str()
        }
    );
    println!("cache_ttl = {}", config.feed.cache_ttl_secs);
    println!("http_timeout = {}", config.feed.http_timeout_secs);
    Ok(())
}

fn init() -> Result<(), CliError> {
    let path = config_file_path();
    if path.exists() {
        println!("Config file already exists: {}", path.display());
        return Ok(());
    }
    ConfigFile::default()
        .save_to(&path)
        .map_err(|e| CliError::Config(e.to_string()))?;
    println!("Created {}", path.display());
    println!("Edit it to set the feed URL.");
    Ok(())
}
