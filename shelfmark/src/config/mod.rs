//! Configuration file handling for ~/.shelfmark/config.ini.
//!
//! Settings structs live in [`settings`], constants in [`defaults`], INI
//! parsing in [`parser`], and serialization in [`writer`]. [`file`] ties
//! them together as load/save on [`ConfigFile`].

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_CACHE_TTL_SECS, DEFAULT_HTTP_TIMEOUT_SECS};
pub use file::{config_directory, config_file_path, ConfigFile, ConfigFileError};
pub use settings::FeedSettings;
