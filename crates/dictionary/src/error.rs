use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the dictionary library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a dictionary contains no usable words.
    #[error("dictionary {0} does not contain any words")]
    NoWords(PathBuf),

    /// Error generated when a dictionary is not valid UTF-8.
    #[error("dictionary {0} is not UTF-8 encoded")]
    Encoding(PathBuf),

    /// Error generated when a language code is malformed.
    #[error("unknown language {0}, expected a code such as en_CA")]
    UnknownLanguage(String),

    /// Error generated when an export name is not a valid identifier.
    #[error("cannot derive an identifier from {0}")]
    InvalidName(String),

    /// Errors generated by the password library.
    #[error(transparent)]
    Password(#[from] pgen_password::Error),

    /// Errors generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
