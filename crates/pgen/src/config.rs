//! Generator configuration.
use crate::{Error, Result};
use pgen_dictionary::{dictionary_path, load_dictionary};
use pgen_password::{
    csprng, generator::PassphraseGenerator, seeded_rng, Limits,
    PhraseConstraint, TransformOptions, WordConstraint, WordList, WordSource,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en_CA";

/// Random number generator used by the command line tool.
pub type BoxedRng = Box<dyn RngCore>;

/// Configuration for passphrase generation.
///
/// Values are layered: built-in defaults, then a TOML file,
/// then command line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of passphrases to print.
    pub count: usize,
    /// Substitute a digit for one letter.
    pub numbers: bool,
    /// Capitalize words after the first.
    pub caps: bool,
    /// Replace an apostrophe with an alternate character.
    pub altchars: bool,
    /// Language code of the system dictionary.
    pub language: String,
    /// Explicit dictionary file, takes precedence over the language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,
    /// Seed for reproducible output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Phrase length bounds.
    pub phrase: PhraseConstraint,
    /// Word length bounds.
    pub word: WordConstraint,
    /// Work limits for a single phrase.
    pub limits: Limits,

    /// Path the file was loaded from used to resolve
    /// a relative dictionary path.
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 5,
            numbers: true,
            caps: true,
            altchars: true,
            language: DEFAULT_LANGUAGE.to_owned(),
            dictionary: None,
            seed: None,
            phrase: Default::default(),
            word: Default::default(),
            limits: Default::default(),
            file: None,
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFile(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let mut config: GeneratorConfig = toml::from_str(&contents)?;
        config.file = Some(path.canonicalize()?);

        if let (Some(dictionary), Some(dir)) =
            (&config.dictionary, config.directory())
        {
            if dictionary.is_relative() {
                config.dictionary = Some(dir.join(dictionary));
            }
        }

        tracing::debug!(path = %path.display(), "config::load");
        Ok(config)
    }

    /// Render this config as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parent directory of the configuration file.
    fn directory(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .and_then(|f| f.parent())
            .map(|p| p.to_path_buf())
    }

    /// Ensure the bounds and work limits are usable.
    pub fn validate(&self) -> Result<()> {
        self.phrase_constraint().validate()?;
        self.limits.validate()?;
        Ok(())
    }

    /// Phrase constraint including the word bounds.
    pub fn phrase_constraint(&self) -> PhraseConstraint {
        PhraseConstraint::new(
            self.phrase.min_length,
            self.phrase.max_length,
            WordConstraint::new(self.word.min_length, self.word.max_length),
        )
    }

    /// Transform flags.
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            use_alt_chars: self.altchars,
            use_caps: self.caps,
            use_leet: self.numbers,
        }
    }

    /// Passphrase generator for this config.
    pub fn generator(&self) -> PassphraseGenerator {
        PassphraseGenerator::new(self.phrase_constraint())
            .options(self.transform_options())
            .limits(self.limits)
    }

    /// Resolve the dictionary file to load.
    pub fn dictionary_path(&self) -> Result<PathBuf> {
        match &self.dictionary {
            Some(path) => Ok(path.clone()),
            None => Ok(dictionary_path(&self.language)?),
        }
    }

    /// Load the configured dictionary.
    pub fn word_list(&self) -> Result<WordList> {
        let path = self.dictionary_path()?;
        if !path.is_file() {
            return Err(Error::NotFile(path));
        }
        Ok(load_dictionary(path)?)
    }

    /// Random number generator, seeded when a seed is configured.
    pub fn rng(&self) -> BoxedRng {
        match self.seed {
            Some(seed) => Box::new(seeded_rng(seed)),
            None => Box::new(csprng()),
        }
    }

    /// Load the dictionary and create a word source.
    pub fn source(&self) -> Result<WordSource<BoxedRng>> {
        Ok(WordSource::new(self.word_list()?, self.rng())?)
    }
}
