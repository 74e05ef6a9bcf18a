use crate::{char_len, Error, Result, WordConstraint, WordSource, APOSTROPHE};
use rand::Rng;

/// Determine if a word satisfies a constraint.
///
/// The length must be inside the bounds and the presence of an
/// apostrophe must exactly match the constraint flag.
pub fn acceptable(word: &str, constraint: &WordConstraint) -> bool {
    let len = char_len(word);
    len >= constraint.min_length
        && len <= constraint.max_length
        && word.contains(APOSTROPHE) == constraint.require_apostrophe
}

/// Draw words from the source until one is acceptable.
///
/// Gives up after `max_attempts` draws.
pub fn random_word<R: Rng>(
    source: &mut WordSource<R>,
    constraint: &WordConstraint,
    max_attempts: usize,
) -> Result<String> {
    for _ in 0..max_attempts {
        let word = source.next_word()?;
        if acceptable(word, constraint) {
            return Ok(word.to_owned());
        }
    }
    tracing::warn!(
        attempts = %max_attempts,
        min = %constraint.min_length,
        max = %constraint.max_length,
        apostrophe = %constraint.require_apostrophe,
        "filter::exhausted",
    );
    Err(Error::WordAttemptsExhausted(max_attempts))
}
