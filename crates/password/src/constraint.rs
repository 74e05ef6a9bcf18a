//! Length and character constraints for words and phrases.
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Constraint applied to each candidate word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordConstraint {
    /// Minimum word length in characters.
    #[serde(rename = "min")]
    pub min_length: usize,
    /// Maximum word length in characters.
    #[serde(rename = "max")]
    pub max_length: usize,
    /// Whether the word must contain an apostrophe.
    ///
    /// When false the word must not contain one.
    #[serde(skip)]
    pub require_apostrophe: bool,
}

impl Default for WordConstraint {
    fn default() -> Self {
        Self {
            min_length: 2,
            max_length: 6,
            require_apostrophe: false,
        }
    }
}

impl WordConstraint {
    /// Create a constraint that rejects apostrophes.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            require_apostrophe: false,
        }
    }

    /// Copy of this constraint with the apostrophe flag set.
    pub fn with_apostrophe(&self, require_apostrophe: bool) -> Self {
        Self {
            require_apostrophe,
            ..*self
        }
    }

    /// Ensure the bounds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(Error::InvalidWordBounds(
                self.min_length,
                self.max_length,
            ));
        }
        Ok(())
    }
}

/// Constraint applied to a finished phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseConstraint {
    /// Minimum phrase length in characters.
    #[serde(rename = "min")]
    pub min_length: usize,
    /// Maximum phrase length in characters.
    #[serde(rename = "max")]
    pub max_length: usize,
    /// Constraint for the words in the phrase.
    #[serde(skip)]
    pub word: WordConstraint,
}

impl Default for PhraseConstraint {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 18,
            word: Default::default(),
        }
    }
}

impl PhraseConstraint {
    /// Create a phrase constraint.
    pub fn new(
        min_length: usize,
        max_length: usize,
        word: WordConstraint,
    ) -> Self {
        Self {
            min_length,
            max_length,
            word,
        }
    }

    /// Ensure the phrase and word bounds are usable.
    pub fn validate(&self) -> Result<()> {
        self.word.validate()?;
        if self.min_length > self.max_length {
            return Err(Error::InvalidPhraseBounds(
                self.min_length,
                self.max_length,
            ));
        }
        Ok(())
    }
}

/// Flags that control phrase assembly and post-processing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Allow one apostrophe word and replace the apostrophe
    /// with an alternate character.
    pub use_alt_chars: bool,
    /// Capitalize every word after the first.
    pub use_caps: bool,
    /// Substitute a digit for one letter.
    pub use_leet: bool,
}
