//! Load hunspell dictionaries and export them as
//! word arrays that can be compiled into a program.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod export;
mod load;

pub use error::Error;
pub use export::{export_file, export_source, ExportOptions};
pub use load::{dictionary_path, load_dictionary, parse_dictionary, DICTIONARY_DIR};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
