//! Command line tool that prints pronounceable passphrases
//! built from dictionary words.
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
mod error;

pub use error::Error;

/// Result type for the executable library.
pub type Result<T> = std::result::Result<T, error::Error>;
