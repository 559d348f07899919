//! Shelfmark CLI - Command-line interface
//!
//! This binary provides a command-line interface to the shelfmark library:
//! resolving call numbers against the live mapping feed, checking feed
//! health, and managing the config file.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use shelfmark::config::config_directory;
use shelfmark::logging::init_logging;

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(version = shelfmark::VERSION)]
#[command(about = "Resolve library call numbers to shelf locations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a call number to its shelf segment(s)
    Resolve {
        /// Library display name, in either display language
        library: String,
        /// Collection display name, in either display language
        collection: String,
        /// Raw call number as shown in the catalog (cutter suffix allowed)
        call_number: String,
        /// Override the feed URL from the config file
        #[arg(long)]
        feed_url: Option<String>,
    },
    /// Fetch the mapping feed once and report row statistics
    CheckFeed {
        /// Override the feed URL from the config file
        #[arg(long)]
        feed_url: Option<String>,
    },
    /// Show or initialize the config file
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_dir = config_directory().join("logs");
    let _logging = match init_logging(&log_dir.to_string_lossy(), "shelfmark.log") {
        Ok(guard) => guard,
        Err(e) => CliError::LoggingInit(e.to_string()).exit(),
    };

    let result = match cli.command {
        Command::Resolve {
            library,
            collection,
            call_number,
            feed_url,
        } => commands::resolve::run(&library, &collection, &call_number, feed_url).await,
        Command::CheckFeed { feed_url } => commands::check_feed::run(feed_url).await,
        Command::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        e.exit();
    }
}
