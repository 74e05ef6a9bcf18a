//! Shared fixtures for the test suite.
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;

/// Word list used by the documented scenarios.
pub const SCENARIO_WORDS: &[&str] = &["cat", "dog", "it's", "rain", "sun"];

/// Write a hunspell style dictionary with a count header
/// and affix flags on some entries.
pub fn write_dictionary(words: &[&str]) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{}", words.len())?;
    for (index, word) in words.iter().enumerate() {
        if index % 2 == 0 {
            writeln!(file, "{}/SM", word)?;
        } else {
            writeln!(file, "{}", word)?;
        }
    }
    file.flush()?;
    Ok(file)
}

/// Split a capitalized phrase into its lower case words.
pub fn split_words(phrase: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for c in phrase.chars() {
        if c.is_uppercase() || words.is_empty() {
            words.push(c.to_lowercase().collect());
        } else if let Some(last) = words.last_mut() {
            last.push(c);
        }
    }
    words
}

/// Path as a string argument for the command line parser.
pub fn arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
