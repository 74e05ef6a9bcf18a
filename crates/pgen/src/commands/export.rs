use crate::Result;
use clap::Args;
use pgen_cli_helpers::messages::success;
use pgen_dictionary::{export_file, ExportOptions};
use std::path::PathBuf;

/// Options for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Shortest word to export.
    #[clap(long, default_value = "3")]
    pub min_length: usize,

    /// Longest word to export.
    #[clap(long, default_value = "11")]
    pub max_length: usize,

    /// Hunspell dictionary to read.
    pub input: PathBuf,

    /// Rust source file to write, the file stem names the array.
    pub output: PathBuf,
}

/// Convert a dictionary into a Rust word array.
pub fn run(args: ExportArgs) -> Result<usize> {
    let options = ExportOptions {
        min_length: args.min_length,
        max_length: args.max_length,
    };
    let count = export_file(&args.input, &args.output, &options)?;
    success(format!(
        "{} --> {} ({} words)",
        args.input.display(),
        args.output.display(),
        count
    ));
    Ok(count)
}
