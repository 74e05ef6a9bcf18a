use crate::{Error, Result};
use pgen_password::{clean_word, WordList};
use std::path::{Path, PathBuf};

/// Directory that holds system hunspell dictionaries.
pub const DICTIONARY_DIR: &str = "/usr/share/hunspell";

/// Resolve the system dictionary file for a language code.
///
/// Codes are a two or three letter language optionally
/// followed by an underscore and a two letter region.
pub fn dictionary_path(language: &str) -> Result<PathBuf> {
    let (lang, region) = match language.split_once('_') {
        Some((lang, region)) => (lang, Some(region)),
        None => (language, None),
    };
    let lang_ok = (2..=3).contains(&lang.len())
        && lang.chars().all(|c| c.is_ascii_alphabetic());
    let region_ok = region
        .map(|r| r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(true);
    if !lang_ok || !region_ok {
        return Err(Error::UnknownLanguage(language.to_owned()));
    }
    Ok(Path::new(DICTIONARY_DIR).join(format!("{language}.dic")))
}

/// Parse the contents of a hunspell dictionary.
///
/// A leading entry count line is skipped and every other
/// line is cleaned of whitespace and affix flags.
pub fn parse_dictionary(text: &str) -> Vec<String> {
    let mut lines = text.lines().peekable();
    if let Some(first) = lines.peek() {
        let first = first.trim();
        if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) {
            lines.next();
        }
    }
    lines
        .map(clean_word)
        .filter(|word| !word.is_empty())
        .map(|word| word.to_owned())
        .collect()
}

/// Load a dictionary file into a word list.
///
/// Files in a legacy encoding such as ISO-8859-1 are
/// rejected, convert them with `iconv` first.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<WordList> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|_| Error::Encoding(path.to_path_buf()))?;
    let words = parse_dictionary(&text);
    if words.is_empty() {
        return Err(Error::NoWords(path.to_path_buf()));
    }
    tracing::debug!(
        path = %path.display(),
        words = %words.len(),
        "dictionary::load",
    );
    Ok(WordList::new(words))
}
