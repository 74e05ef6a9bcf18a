use anyhow::Result;
use clap::Parser;
use pgen::{cli::{dispatch, Pgen}, config::GeneratorConfig};
use pgen_password::{transform::ALT_CHARS, APOSTROPHE};
use pgen_unit_tests::{arg, split_words, write_dictionary, SCENARIO_WORDS};

fn run(args: &[String]) -> Result<String> {
    let parsed = Pgen::try_parse_from(args)?;
    let mut out = Vec::new();
    dispatch(parsed, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn generate(dict: &str, extra: &[&str]) -> Result<String> {
    let mut args: Vec<String> = ["pgen", "generate", "--dict", dict]
        .iter()
        .map(|s| s.to_string())
        .collect();
    args.extend(extra.iter().map(|s| s.to_string()));
    run(&args)
}

#[test]
fn generate_prints_count_lines() -> Result<()> {
    let file = write_dictionary(SCENARIO_WORDS)?;
    let output = generate(
        &arg(file.path()),
        &["--count", "7", "--length", "6", "--max-length", "10", "--seed", "1"],
    )?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(7, lines.len());
    for line in lines {
        let len = line.chars().count();
        assert!((6..=10).contains(&len), "{line}");
        assert!(!line.contains(APOSTROPHE));
    }
    Ok(())
}

#[test]
fn generate_is_reproducible_with_seed() -> Result<()> {
    let file = write_dictionary(SCENARIO_WORDS)?;
    let extra = ["--length", "6", "--max-length", "10", "--seed", "42"];
    let first = generate(&arg(file.path()), &extra)?;
    let second = generate(&arg(file.path()), &extra)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn generate_without_transforms() -> Result<()> {
    let file = write_dictionary(SCENARIO_WORDS)?;
    let output = generate(
        &arg(file.path()),
        &["-n", "-a", "--length", "6", "--max-length", "10", "--seed", "5"],
    )?;
    for line in output.lines() {
        assert!(!line.chars().any(|c| c.is_ascii_digit()), "{line}");
        assert!(!line.chars().any(|c| ALT_CHARS.contains(&c)), "{line}");
        for word in split_words(line) {
            assert!(SCENARIO_WORDS.contains(&word.as_str()), "{line}");
        }
    }
    Ok(())
}

#[test]
fn generate_entropy_without_apostrophe_words() -> Result<()> {
    let words = ["cat", "dog", "sun", "rain"];
    let file = write_dictionary(&words)?;
    let output = generate(
        &arg(file.path()),
        &["-e", "-n", "--count", "3", "--length", "6", "--max-length", "10"],
    )?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(3, lines.len());
    for line in lines {
        assert!(!line.contains("guesses"), "{line}");
        for word in split_words(line) {
            assert!(words.contains(&word.as_str()), "{line}");
        }
    }
    Ok(())
}

#[test]
fn generate_rejects_inverted_bounds() -> Result<()> {
    let file = write_dictionary(SCENARIO_WORDS)?;
    let result = generate(
        &arg(file.path()),
        &["--length", "12", "--max-length", "10"],
    );
    assert!(result.is_err());
    Ok(())
}

#[test]
fn generate_reports_unsatisfiable() -> Result<()> {
    let file = write_dictionary(&["abc"])?;
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("pgen.toml");
    std::fs::write(
        &config,
        "[limits]\nmax_restarts = 10\n\n[phrase]\nmin = 4\nmax = 5\n",
    )?;
    let result = generate(
        &arg(file.path()),
        &["--config", arg(&config).as_str(), "--seed", "1"],
    );
    let err = result.expect_err("phrase bounds cannot be met");
    assert!(err.to_string().contains("restarts"), "{err}");
    Ok(())
}

#[test]
fn words_prints_filtered_words() -> Result<()> {
    let file = write_dictionary(SCENARIO_WORDS)?;
    let dict = arg(file.path());
    let args: Vec<String> = [
        "pgen",
        "words",
        "--dict",
        dict.as_str(),
        "--count",
        "10",
        "--apostrophe",
        "--seed",
        "9",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let output = run(&args)?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(10, lines.len());
    assert!(lines.iter().all(|line| *line == "it's"));
    Ok(())
}

#[test]
fn init_writes_default_config() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pgen.toml");
    let args = vec!["pgen".to_owned(), "init".to_owned(), arg(&path)];
    run(&args)?;
    let config = GeneratorConfig::load(&path)?;
    assert_eq!(5, config.count);
    assert_eq!(12, config.phrase.min_length);

    // Refuses to overwrite without --force.
    assert!(run(&args).is_err());
    let mut forced = args.clone();
    forced.insert(2, "--force".to_owned());
    run(&forced)?;
    Ok(())
}
