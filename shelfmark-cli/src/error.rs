//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use shelfmark::feed::FeedError;
use shelfmark::service::ServiceError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to create the resolver
    ServiceCreation(ServiceError),
    /// Feed fetch or parse failure surfaced by check-feed
    Feed(FeedError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Set the feed URL in {} :", shelfmark::config::config_file_path().display());
                eprintln!("  [feed]");
                eprintln!("  url = https://example.org/shelf-mappings.csv");
                eprintln!();
                eprintln!("or pass --feed-url. Run 'shelfmark config init' to create the file.");
            }
            CliError::Feed(FeedError::Parse(_)) => {
                eprintln!();
                eprintln!("The feed was fetched but is not a usable mapping table. Check that");
                eprintln!("the spreadsheet export still has the expected header row.");
            }
            _ => {}
        }

        process::exit(1);
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "{}", msg),
            CliError::ServiceCreation(e) => write!(f, "Failed to create resolver: {}", e),
            CliError::Feed(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {}
