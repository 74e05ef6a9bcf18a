//! Post-processing applied to finished phrases.
use crate::{TransformOptions, APOSTROPHE};
use rand::{seq::SliceRandom, Rng};

/// Characters that may replace an apostrophe.
pub const ALT_CHARS: &[char] = &['-', '+', '_', '%'];

/// Letter to digit substitutions in priority order.
pub const LEET_SUBSTITUTIONS: &[(char, char)] =
    &[('t', '7'), ('b', '8'), ('a', '4'), ('s', '5')];

/// Substitution used when no prioritized letter is present.
pub const LEET_FALLBACK: (char, char) = ('e', '3');

/// Append a word with the first character in upper case.
pub fn push_capitalized(phrase: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        phrase.extend(first.to_uppercase());
        phrase.push_str(chars.as_str());
    }
}

/// Replace apostrophes with a random alternate character.
///
/// Phrases carry at most one apostrophe so a single
/// character is drawn for the whole phrase.
pub fn apply_alt_chars<R: Rng + ?Sized>(phrase: &str, rng: &mut R) -> String {
    if !phrase.contains(APOSTROPHE) {
        return phrase.to_owned();
    }
    let replacement = ALT_CHARS.choose(rng).copied().unwrap_or('-');
    phrase.replace(APOSTROPHE, &replacement.to_string())
}

/// Replace the first occurrence of one letter with a digit.
///
/// Letters are tried in the order `t`, `b`, `a`, `s` and
/// the first one present is substituted. Otherwise the first
/// `e`, if any, becomes `3`.
pub fn apply_leet(phrase: &str) -> String {
    let (letter, digit) = LEET_SUBSTITUTIONS
        .iter()
        .find(|(letter, _)| phrase.contains(*letter))
        .copied()
        .unwrap_or(LEET_FALLBACK);
    phrase.replacen(letter, &digit.to_string(), 1)
}

/// Applies the enabled transforms to finished phrases.
#[derive(Debug, Clone, Copy)]
pub struct Transformer {
    options: TransformOptions,
}

impl Transformer {
    /// Create a transformer.
    pub fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    /// Apply alternate characters then leet digits.
    pub fn apply<R: Rng + ?Sized>(&self, phrase: String, rng: &mut R) -> String {
        let phrase = if self.options.use_alt_chars {
            apply_alt_chars(&phrase, rng)
        } else {
            phrase
        };
        if self.options.use_leet {
            apply_leet(&phrase)
        } else {
            phrase
        }
    }
}
