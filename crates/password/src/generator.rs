//! Utility for generating passphrases.
use crate::{
    builder::{Limits, PhraseBuilder},
    transform::Transformer,
    PhraseConstraint, Result, TransformOptions, WordSource,
};
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use zxcvbn::{zxcvbn, Entropy};

/// Measure the entropy in a passphrase.
pub fn measure_entropy(passphrase: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(passphrase, user_inputs)
}

/// Generated passphrase result.
#[derive(Debug, Clone)]
pub struct PassphraseResult {
    /// The generated passphrase.
    pub passphrase: SecretString,
    /// The computed entropy for the passphrase.
    pub entropy: Entropy,
}

/// Options for passphrase generation.
#[derive(Debug, Clone)]
pub struct PassphraseGenerator {
    constraint: PhraseConstraint,
    options: TransformOptions,
    limits: Limits,
}

impl PassphraseGenerator {
    /// Create a passphrase generator with every transform disabled.
    pub fn new(constraint: PhraseConstraint) -> Self {
        Self {
            constraint,
            options: Default::default(),
            limits: Default::default(),
        }
    }

    /// Capitalize words after the first.
    pub fn caps(mut self, enabled: bool) -> Self {
        self.options.use_caps = enabled;
        self
    }

    /// Replace an apostrophe with an alternate character.
    pub fn alt_chars(mut self, enabled: bool) -> Self {
        self.options.use_alt_chars = enabled;
        self
    }

    /// Substitute a digit for one letter.
    pub fn leet(mut self, enabled: bool) -> Self {
        self.options.use_leet = enabled;
        self
    }

    /// Set all transform flags.
    pub fn options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the work limits.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Phrase constraint.
    pub fn constraint(&self) -> &PhraseConstraint {
        &self.constraint
    }

    /// Transform flags.
    pub fn transform_options(&self) -> &TransformOptions {
        &self.options
    }

    /// Generate a passphrase as a plain string.
    pub fn phrase<R: Rng>(&self, source: &mut WordSource<R>) -> Result<String> {
        let builder =
            PhraseBuilder::new(self.constraint, self.options).limits(self.limits);
        let phrase = builder.build(source)?;
        Ok(Transformer::new(self.options).apply(phrase, source.rng_mut()))
    }

    /// Generate a passphrase.
    pub fn one<R: Rng>(
        &self,
        source: &mut WordSource<R>,
    ) -> Result<PassphraseResult> {
        let passphrase = SecretString::new(self.phrase(source)?.into());
        let entropy = measure_entropy(passphrase.expose_secret(), &[]);
        Ok(PassphraseResult {
            passphrase,
            entropy,
        })
    }

    /// Generate multiple passphrases.
    pub fn many<R: Rng>(
        &self,
        source: &mut WordSource<R>,
        count: usize,
    ) -> Result<Vec<PassphraseResult>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one(source)?);
        }
        Ok(results)
    }
}

/// Generate one passphrase using the given generator options.
pub fn generate_phrase<R: Rng>(
    source: &mut WordSource<R>,
    generator: &PassphraseGenerator,
) -> Result<String> {
    generator.phrase(source)
}
