use anyhow::Result;
use pgen_dictionary::{export_file, load_dictionary, ExportOptions};
use pgen_unit_tests::write_dictionary;

#[test]
fn load_cleans_entries() -> Result<()> {
    let file = write_dictionary(&["cat", "dog", "it's", "rain"])?;
    let words = load_dictionary(file.path())?;
    assert_eq!(
        &["cat", "dog", "it's", "rain"],
        words
            .as_slice()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .as_slice()
    );
    Ok(())
}

#[test]
fn export_writes_word_array() -> Result<()> {
    let file = write_dictionary(&[
        "at", "cat", "dog", "cat", "wasn't", "internationalization",
    ])?;
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("en_CA.rs");

    let count = export_file(file.path(), &output, &ExportOptions::default())?;
    assert_eq!(3, count);

    let source = std::fs::read_to_string(&output)?;
    assert!(source.contains("pub const EN_CA_COUNT: usize = 3;"));
    assert!(source.contains("pub static EN_CA: &[&str] = &["));
    assert!(source.contains("\"wasn't\","));
    assert!(!source.contains("\"at\""));
    assert!(!source.contains("internationalization"));
    Ok(())
}

#[test]
fn export_custom_bounds() -> Result<()> {
    let file = write_dictionary(&["at", "cat", "rain"])?;
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("short.rs");
    let options = ExportOptions {
        min_length: 2,
        max_length: 3,
    };
    assert_eq!(2, export_file(file.path(), &output, &options)?);
    Ok(())
}
