use anyhow::Result;
use pgen_password::{
    acceptable, seeded_rng,
    transform::{apply_alt_chars, apply_leet, ALT_CHARS},
    PhraseBuilder, PhraseConstraint, TransformOptions, WordConstraint,
    WordList, WordSource, APOSTROPHE,
};
use pgen_unit_tests::{split_words, SCENARIO_WORDS};

#[test]
fn scenario_caps_without_alt_chars() -> Result<()> {
    let word = WordConstraint::new(2, 6);
    let constraint = PhraseConstraint::new(6, 10, word);
    let builder = PhraseBuilder::new(
        constraint,
        TransformOptions {
            use_alt_chars: false,
            use_caps: true,
            use_leet: false,
        },
    );
    let filtered: Vec<&str> = SCENARIO_WORDS
        .iter()
        .copied()
        .filter(|w| acceptable(w, &word))
        .collect();
    assert_eq!(vec!["cat", "dog", "rain", "sun"], filtered);

    let mut source = WordSource::new(SCENARIO_WORDS.into(), seeded_rng(2024))?;
    for _ in 0..100 {
        let phrase = builder.build(&mut source)?;
        let len = phrase.chars().count();
        assert!((6..=10).contains(&len), "{phrase}");
        assert!(phrase.starts_with(|c: char| c.is_lowercase()));

        let words = split_words(&phrase);
        assert!(words.len() >= 2, "{phrase}");
        for word in &words {
            assert!(filtered.contains(&word.as_str()), "{phrase}");
        }
    }
    Ok(())
}

#[test]
fn phrases_respect_bounds_for_many_seeds() -> Result<()> {
    let words = WordList::from_raw([
        "a", "an", "the", "quick", "brown", "fox", "jumps", "over", "lazy",
        "dog's", "wasn't", "zebra", "elephants",
    ]);
    let constraint = PhraseConstraint::new(12, 18, WordConstraint::new(2, 6));
    let builder = PhraseBuilder::new(
        constraint,
        TransformOptions {
            use_alt_chars: true,
            use_caps: true,
            use_leet: true,
        },
    );
    for seed in 1..=20 {
        let mut source = WordSource::new(words.clone(), seeded_rng(seed))?;
        let phrase = builder.build(&mut source)?;
        let len = phrase.chars().count();
        assert!((12..=18).contains(&len), "{phrase}");
        assert!(phrase.matches(APOSTROPHE).count() <= 1, "{phrase}");
    }
    Ok(())
}

#[test]
fn scenario_leet() {
    assert_eq!("ca7dog", apply_leet("catdog"));
    assert_eq!("8ob", apply_leet("bob"));
    assert_eq!("5un", apply_leet("sun"));
    assert_eq!("xyz", apply_leet("xyz"));
}

#[test]
fn leet_changes_one_position() {
    for phrase in ["rainDogSun", "treesBees", "eleven", "basket"] {
        let result = apply_leet(phrase);
        let changed = phrase
            .chars()
            .zip(result.chars())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(1, changed, "{phrase} -> {result}");
    }
}

#[test]
fn scenario_alt_chars() {
    let mut rng = seeded_rng(8);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        let result = apply_alt_chars("it's", &mut rng);
        let (head, tail) = result.split_at(2);
        assert_eq!("it", head);
        let mut tail = tail.chars();
        let alt = tail.next().unwrap();
        assert!(ALT_CHARS.contains(&alt));
        assert_eq!("s", tail.as_str());
        seen.insert(alt);
    }
    assert_eq!(ALT_CHARS.len(), seen.len());
}
