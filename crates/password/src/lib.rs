//! Pronounceable passphrase generation.
//!
//! Passphrases are built by concatenating short dictionary words
//! until the phrase length falls inside the requested bounds and
//! then optionally transformed by replacing an apostrophe with an
//! alternate character and substituting a digit for one letter.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod builder;
mod constraint;
mod error;
mod filter;
pub mod generator;
mod source;
pub mod transform;

pub use builder::{Limits, PhraseBuilder};
pub use constraint::{PhraseConstraint, TransformOptions, WordConstraint};
pub use error::Error;
pub use filter::{acceptable, random_word};
pub use generator::{generate_phrase, PassphraseGenerator, PassphraseResult};
pub use source::{clean_word, csprng, seeded_rng, WordList, WordSource};

pub use zxcvbn;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Apostrophe character.
pub const APOSTROPHE: char = '\'';

/// Number of characters in a string.
///
/// Lengths are counted in characters rather than bytes so
/// that accented dictionary words measure the same as their
/// unaccented counterparts.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
