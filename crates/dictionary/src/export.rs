//! Export a dictionary as a Rust word array.
use crate::{load_dictionary, Error, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

/// Length filter for exported words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Shortest word to keep.
    pub min_length: usize,
    /// Longest word to keep.
    pub max_length: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 11,
        }
    }
}

impl ExportOptions {
    fn keep(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= self.min_length && len <= self.max_length
    }
}

/// Convert a name such as a file stem into a constant identifier.
fn identifier(name: &str) -> Result<String> {
    let ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    match ident.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => Ok(ident),
        _ => Err(Error::InvalidName(name.to_owned())),
    }
}

/// Render words as Rust source declaring a static array.
///
/// Words outside the length filter are skipped and
/// duplicates are emitted once in first seen order.
pub fn export_source(
    name: &str,
    words: &[String],
    options: &ExportOptions,
) -> Result<String> {
    Ok(render(name, words, options)?.0)
}

fn render(
    name: &str,
    words: &[String],
    options: &ExportOptions,
) -> Result<(String, usize)> {
    let ident = identifier(name)?;
    let mut seen = HashSet::new();
    let kept: Vec<&str> = words
        .iter()
        .map(|w| w.as_str())
        .filter(|w| options.keep(w) && seen.insert(*w))
        .collect();

    let mut out = format!(
        "//! Word list `{name}`, generated by `pgen export`.\n\n\
         /// Number of words in [`{ident}`].\n\
         pub const {ident}_COUNT: usize = {};\n\n\
         /// Dictionary words.\n\
         pub static {ident}: &[&str] = &[\n",
        kept.len(),
    );
    for word in &kept {
        out.push_str(&format!("    {word:?},\n"));
    }
    out.push_str("];\n");
    Ok((out, kept.len()))
}

/// Load a dictionary file and write it as Rust source.
///
/// The array is named after the output file stem. Returns
/// the number of exported words.
pub fn export_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();
    let name = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let words = load_dictionary(input)?;
    let (source, count) = render(&name, words.as_slice(), options)?;
    std::fs::write(output, source)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        words = %count,
        "dictionary::export",
    );
    Ok(count)
}
