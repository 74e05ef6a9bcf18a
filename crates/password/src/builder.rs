//! Greedy phrase assembly with restarts.
use crate::{
    char_len, filter::random_word, transform::push_capitalized, Error,
    PhraseConstraint, Result, TransformOptions, WordList, WordSource,
    APOSTROPHE,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Bounds on the work performed to build one phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of times a phrase is discarded and restarted.
    pub max_restarts: usize,
    /// Maximum number of draws when searching for one acceptable word.
    pub max_word_attempts: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_restarts: 10_000,
            max_word_attempts: 100_000,
        }
    }
}

impl Limits {
    /// Ensure at least one draw is allowed per word.
    ///
    /// Zero restarts is valid and means a single attempt.
    pub fn validate(&self) -> Result<()> {
        if self.max_word_attempts == 0 {
            return Err(Error::ZeroWordAttempts);
        }
        Ok(())
    }
}

/// Builds phrases by appending filtered words.
///
/// Words are appended until the phrase reaches the minimum length.
/// After every append the phrase is discarded and started again
/// when it overshoots the maximum length or when the characters
/// still missing are fewer than the shortest legal word.
#[derive(Debug, Clone)]
pub struct PhraseBuilder {
    constraint: PhraseConstraint,
    caps: bool,
    alt_chars: bool,
    limits: Limits,
}

impl PhraseBuilder {
    /// Create a phrase builder.
    pub fn new(constraint: PhraseConstraint, options: TransformOptions) -> Self {
        Self {
            constraint,
            caps: options.use_caps,
            alt_chars: options.use_alt_chars,
            limits: Default::default(),
        }
    }

    /// Set the work limits.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Build one phrase.
    pub fn build<R: Rng>(&self, source: &mut WordSource<R>) -> Result<String> {
        let alt_chars = self.check_words(source.words())?;
        let mut restarts = 0;
        loop {
            if let Some(phrase) = self.attempt(source, alt_chars)? {
                tracing::trace!(restarts = %restarts, "phrase::built");
                return Ok(phrase);
            }

            restarts += 1;
            tracing::trace!(restarts = %restarts, "phrase::reset");
            if restarts > self.limits.max_restarts {
                tracing::warn!(
                    min = %self.constraint.min_length,
                    max = %self.constraint.max_length,
                    restarts = %self.limits.max_restarts,
                    "phrase::unsatisfiable",
                );
                return Err(Error::UnsatisfiableConstraint {
                    min: self.constraint.min_length,
                    max: self.constraint.max_length,
                    restarts: self.limits.max_restarts,
                });
            }
        }
    }

    /// Fail fast when no word can ever be drawn.
    ///
    /// Returns whether apostrophe words are available for
    /// alternate characters.
    fn check_words(&self, words: &WordList) -> Result<bool> {
        let plain = self.constraint.word.with_apostrophe(false);
        if !words.any_acceptable(&plain) {
            return Err(Error::NoAcceptableWord {
                min: plain.min_length,
                max: plain.max_length,
                apostrophe: false,
            });
        }

        if self.alt_chars
            && !words.any_acceptable(&plain.with_apostrophe(true))
        {
            tracing::warn!(
                min = %plain.min_length,
                max = %plain.max_length,
                "phrase::no_apostrophe_words",
            );
            return Ok(false);
        }

        Ok(self.alt_chars)
    }

    /// Single attempt, `None` means the phrase was discarded.
    fn attempt<R: Rng>(
        &self,
        source: &mut WordSource<R>,
        alt_chars: bool,
    ) -> Result<Option<String>> {
        let min = self.constraint.min_length;
        let max = self.constraint.max_length;
        let word_min = self.constraint.word.min_length;

        let mut phrase = self.draw(source, false)?;
        let mut len = char_len(&phrase);

        while len < min {
            let want_apostrophe = alt_chars && !phrase.contains(APOSTROPHE);
            let word = self.draw(source, want_apostrophe)?;
            if self.caps {
                push_capitalized(&mut phrase, &word);
            } else {
                phrase.push_str(&word);
            }
            len = char_len(&phrase);

            let dead_end = len < min && min - len < word_min;
            if dead_end || len > max {
                return Ok(None);
            }
        }

        // The opening word alone may already be too long.
        if len > max {
            return Ok(None);
        }

        Ok(Some(phrase))
    }

    fn draw<R: Rng>(
        &self,
        source: &mut WordSource<R>,
        want_apostrophe: bool,
    ) -> Result<String> {
        let constraint = self.constraint.word.with_apostrophe(want_apostrophe);
        random_word(source, &constraint, self.limits.max_word_attempts)
    }
}
