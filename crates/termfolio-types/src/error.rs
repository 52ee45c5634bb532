//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio crates.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("portfolio error: {0}")]
    Portfolio(String),

    #[error("download error: {0}")]
    Download(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
