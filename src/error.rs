//! Error types for the terminal host and config loading.
//!
//! The simulation itself cannot fail; only the host's I/O and the optional
//! config file can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config value: {0}")]
    ConfigValue(String),

    #[error("Failed to install logger: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
