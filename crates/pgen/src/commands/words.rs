use super::SourceArgs;
use crate::Result;
use clap::Args;
use pgen_password::random_word;
use std::io::Write;

/// Options for the words command.
#[derive(Args, Debug, Default)]
pub struct WordsArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// How many words to print.
    #[clap(long, default_value = "6")]
    pub count: usize,

    /// Only print words that contain an apostrophe.
    #[clap(long)]
    pub apostrophe: bool,
}

/// Print random dictionary words that pass the word filter.
pub fn run(args: WordsArgs, out: &mut impl Write) -> Result<()> {
    let config = args.source.resolve()?;
    config.validate()?;

    let mut source = config.source()?;
    let constraint = config
        .phrase_constraint()
        .word
        .with_apostrophe(args.apostrophe);

    for _ in 0..args.count {
        let word =
            random_word(&mut source, &constraint, config.limits.max_word_attempts)?;
        writeln!(out, "{}", word)?;
    }
    out.flush()?;
    Ok(())
}
