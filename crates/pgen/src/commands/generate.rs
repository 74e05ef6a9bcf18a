use super::{toggle, SourceArgs};
use crate::{config::GeneratorConfig, Result};
use clap::Args;
use pgen_cli_helpers::messages::{info, warn};
use pgen_password::generator::measure_entropy;
use std::io::Write;

/// Options for the generate command.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// How many passphrases to print.
    #[clap(long)]
    pub count: Option<usize>,

    /// Minimum passphrase length.
    #[clap(long = "length")]
    pub phrase_min: Option<usize>,

    /// Maximum passphrase length.
    #[clap(long = "max-length")]
    pub phrase_max: Option<usize>,

    /// Substitute a digit for one letter.
    #[clap(long, overrides_with = "no_numbers")]
    pub numbers: bool,

    /// No digit substitution.
    #[clap(short = 'n', long, overrides_with = "numbers")]
    pub no_numbers: bool,

    /// Capitalize words after the first.
    #[clap(long, overrides_with = "no_caps")]
    pub caps: bool,

    /// No capitalization.
    #[clap(short = 'c', long, overrides_with = "caps")]
    pub no_caps: bool,

    /// Replace an apostrophe with an alternate character.
    #[clap(long, overrides_with = "no_altchars")]
    pub altchars: bool,

    /// No alternate characters.
    #[clap(short = 'a', long, overrides_with = "altchars")]
    pub no_altchars: bool,

    /// Print an estimate of the guesses needed for each passphrase.
    #[clap(short, long)]
    pub entropy: bool,
}

impl GenerateArgs {
    /// Resolve the configuration for this command.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut config = self.source.resolve()?;
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(min) = self.phrase_min {
            config.phrase.min_length = min;
        }
        if let Some(max) = self.phrase_max {
            config.phrase.max_length = max;
        }
        if let Some(numbers) = toggle(self.numbers, self.no_numbers) {
            config.numbers = numbers;
        }
        if let Some(caps) = toggle(self.caps, self.no_caps) {
            config.caps = caps;
        }
        if let Some(altchars) = toggle(self.altchars, self.no_altchars) {
            config.altchars = altchars;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Print passphrases, one per line.
///
/// The first failure aborts the run.
pub fn run(args: GenerateArgs, out: &mut impl Write) -> Result<()> {
    let config = args.resolve()?;
    let mut source = config.source()?;
    let generator = config.generator();

    let word = generator.constraint().word;
    let acceptable = source.words().count_acceptable(&word);
    let apostrophe = source
        .words()
        .count_acceptable(&word.with_apostrophe(true));
    if generator.transform_options().use_alt_chars && apostrophe == 0 {
        warn("dictionary has no apostrophe words, alternate characters are skipped");
    }

    tracing::debug!(
        count = %config.count,
        words = %source.words().len(),
        acceptable = %acceptable,
        apostrophe = %apostrophe,
        options = ?generator.transform_options(),
        "generate::start",
    );

    for _ in 0..config.count {
        let phrase = generator.phrase(&mut source)?;
        writeln!(out, "{phrase}")?;
        if args.entropy {
            let entropy = measure_entropy(&phrase, &[]);
            info(format!("guesses ~ 10^{:.1}", entropy.guesses_log10()));
        }
    }
    out.flush()?;
    Ok(())
}
