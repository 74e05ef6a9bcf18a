use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the command line tool.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a configuration file does not exist.
    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    /// Error generated when refusing to overwrite a file.
    #[error("file {0} already exists, use --force to overwrite")]
    FileExists(PathBuf),

    /// Errors generated by the password library.
    #[error(transparent)]
    Password(#[from] pgen_password::Error),

    /// Errors generated by the dictionary library.
    #[error(transparent)]
    Dictionary(#[from] pgen_dictionary::Error),

    /// Errors generated parsing TOML.
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// Errors generated serializing TOML.
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    /// Errors generated by JSON serialization.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Errors generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
