//! Subcommand implementations.
use crate::{config::GeneratorConfig, Result};
use clap::Args;
use std::path::PathBuf;

pub mod export;
pub mod generate;
pub mod init;
pub mod words;

/// Resolve a pair of on/off flags.
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Options shared by commands that draw dictionary words.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Configuration file to load.
    #[clap(long, env = "PGEN_CONFIG", hide_env_values = true)]
    pub config: Option<PathBuf>,

    /// Language of the system dictionary.
    #[clap(short, long)]
    pub lang: Option<String>,

    /// Dictionary file, overrides the language.
    #[clap(short, long)]
    pub dict: Option<PathBuf>,

    /// Seed the random number generator for reproducible output.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Minimum word length.
    #[clap(long)]
    pub word_min: Option<usize>,

    /// Maximum word length.
    #[clap(long)]
    pub word_max: Option<usize>,
}

impl SourceArgs {
    /// Load the config file, if any, and apply these options.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(lang) = &self.lang {
            config.language = lang.clone();
        }
        if let Some(dict) = &self.dict {
            config.dictionary = Some(dict.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(min) = self.word_min {
            config.word.min_length = min;
        }
        if let Some(max) = self.word_max {
            config.word.max_length = max;
        }
    }
}
