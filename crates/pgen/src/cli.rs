//! Command line interface.
use crate::{
    commands::{
        export::{self, ExportArgs},
        generate::{self, GenerateArgs},
        init,
        words::{self, WordsArgs},
    },
    Result,
};
use clap::{CommandFactory, Parser, Subcommand};
use pgen_cli_helpers::CommandTree;
use std::{io::Write, path::PathBuf};

#[derive(Parser, Debug)]
#[clap(name = "pgen", author, version, about, long_about = None)]
pub struct Pgen {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print pronounceable passphrases.
    #[clap(alias = "gen")]
    Generate(GenerateArgs),
    /// Print random words that pass the word filter.
    Words(WordsArgs),
    /// Convert a dictionary into a Rust word array.
    Export(ExportArgs),
    /// Create a configuration file.
    Init {
        /// Overwrite an existing file.
        #[clap(short, long)]
        force: bool,

        /// Config file to write.
        config: PathBuf,
    },
}

pub fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("PGEN_CLI_JSON").ok().is_some() {
        let cmd = Pgen::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        std::process::exit(0);
    }

    let args = Pgen::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(args, &mut out)
}

/// Execute parsed arguments writing command output to `out`.
pub fn dispatch(args: Pgen, out: &mut impl Write) -> Result<()> {
    match args.cmd {
        Command::Generate(args) => generate::run(args, out)?,
        Command::Words(args) => words::run(args, out)?,
        Command::Export(args) => {
            export::run(args)?;
        }
        Command::Init { force, config } => init::run(config, force)?,
    }
    Ok(())
}
