//! Word lists and random word draws.
use crate::{filter::acceptable, Error, Result, WordConstraint};
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::Arc;

/// Delimiter that starts a dictionary annotation suffix.
const ANNOTATION_DELIMITER: char = '/';

/// Default cryptographically secure RNG.
pub fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Seeded RNG that yields the same sequence for the same seed.
pub fn seeded_rng(seed: u64) -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(seed)
}

/// Strip surrounding whitespace and any annotation suffix
/// from a raw dictionary entry.
///
/// ```
/// use pgen_password::clean_word;
/// assert_eq!("rain", clean_word("rain/SMDG\n"));
/// assert_eq!("it's", clean_word("  it's  "));
/// ```
pub fn clean_word(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.split_once(ANNOTATION_DELIMITER) {
        Some((word, _)) => word.trim_end(),
        None => trimmed,
    }
}

/// Immutable collection of candidate words.
///
/// Cloning is cheap; clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Arc<[String]>,
}

impl WordList {
    /// Create a word list from already cleaned words.
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words: words.into(),
        }
    }

    /// Create a word list from raw dictionary entries.
    ///
    /// Each entry is cleaned and entries that are empty
    /// after cleaning are dropped.
    pub fn from_raw<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .filter_map(|entry| {
                let word = clean_word(entry.as_ref());
                (!word.is_empty()).then(|| word.to_owned())
            })
            .collect::<Vec<_>>();
        Self::new(words)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Determine if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in this list.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Count the words that satisfy a constraint.
    pub fn count_acceptable(&self, constraint: &WordConstraint) -> usize {
        self.words
            .iter()
            .filter(|word| acceptable(word, constraint))
            .count()
    }

    /// Determine if any word satisfies a constraint.
    pub fn any_acceptable(&self, constraint: &WordConstraint) -> bool {
        self.words.iter().any(|word| acceptable(word, constraint))
    }
}

impl From<Vec<String>> for WordList {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl From<&[&str]> for WordList {
    fn from(value: &[&str]) -> Self {
        Self::new(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Draws words uniformly at random from a word list.
pub struct WordSource<R> {
    words: WordList,
    rng: R,
}

impl<R: Rng> WordSource<R> {
    /// Create a word source.
    ///
    /// Fails when the word list is empty.
    pub fn new(words: WordList, rng: R) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptySource);
        }
        Ok(Self { words, rng })
    }

    /// Draw the next word.
    pub fn next_word(&mut self) -> Result<&str> {
        self.words
            .as_slice()
            .choose(&mut self.rng)
            .map(|word| word.as_str())
            .ok_or(Error::EmptySource)
    }

    /// Underlying word list.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Random number generator used for draws.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
