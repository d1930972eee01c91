use std::path::Path;

use frequency::{count_file, count_words, write_report, FrequencyError};
use proptest::prelude::*;

const TEXT: &str = "it was the best of times it was the worst of times
it was the age of wisdom it was the age of foolishness
it was the epoch of belief it was the epoch of incredulity";

#[test]
fn tally_matrix() {
    let tally = count_words(TEXT.as_bytes(), 4).unwrap();
    assert_eq!(tally.total, 36);
    assert_eq!(tally.counted, 10);
    assert_eq!(tally.distinct(), 8);
    assert_eq!(tally.words.get("times"), Some(&2));
    assert_eq!(tally.words.get("epoch"), Some(&2));
    assert!(!tally.words.contains("was"));
    tally.words.assert_valid().unwrap();

    // "epoch" and "times" both appear twice, "epoch" sorts first.
    assert_eq!(tally.most_frequent(), Some(("epoch", 2)));
    assert_eq!(tally.top(2), vec![("epoch", 2), ("times", 2)]);
}

#[test]
fn min_len_zero_counts_everything_matrix() {
    let tally = count_words(TEXT.as_bytes(), 0).unwrap();
    assert_eq!(tally.total, tally.counted);
    assert_eq!(tally.most_frequent(), Some(("it", 6)));
    assert_eq!(tally.top(3), vec![("it", 6), ("of", 6), ("the", 6)]);
}

#[test]
fn report_matrix() {
    let tally = count_words(TEXT.as_bytes(), 4).unwrap();
    let mut out = Vec::new();
    write_report(&tally, 3, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "epoch 2\ntimes 2\nbelief 1\ndistinct = 8, words = 10\n"
    );
}

#[test]
fn count_file_matrix() {
    let path = std::env::temp_dir().join(format!("skeleton-frequency-{}.txt", std::process::id()));
    std::fs::write(&path, TEXT).unwrap();
    let tally = count_file(&path, 4).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(tally.counted, 10);

    let missing = Path::new("/definitely/not/here.txt");
    let err = count_file(missing, 4).unwrap_err();
    assert!(matches!(err, FrequencyError::Open { .. }));
    assert!(err.to_string().starts_with("failed to open /definitely/not/here.txt"));
}

#[test]
fn latin1_file_matrix() {
    let path = std::env::temp_dir().join(format!("skeleton-frequency-latin1-{}.txt", std::process::id()));
    std::fs::write(&path, b"caf\xe9 caf\xe9\nna\xefve word\r\nna\xefve\n").unwrap();
    let tally = count_file(&path, 5).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(tally.total, 5);
    assert_eq!(tally.counted, 2);
    assert_eq!(tally.distinct(), 1);
    assert_eq!(tally.most_frequent(), Some(("na\u{fffd}ve", 2)));

    let mut out = Vec::new();
    write_report(&tally, 1, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "na\u{fffd}ve 2\ndistinct = 1, words = 2\n"
    );
}

proptest! {
    #[test]
    fn counts_add_up(words in proptest::collection::vec("[a-e]{1,6}", 0..200), min_len in 0usize..5) {
        let text = words.join(" ");
        let tally = count_words(text.as_bytes(), min_len).unwrap();

        prop_assert_eq!(tally.total, words.len() as u64);
        let long = words.iter().filter(|w| w.chars().count() >= min_len).count() as u64;
        prop_assert_eq!(tally.counted, long);
        prop_assert_eq!(tally.words.values().sum::<u64>(), long);
    }
}
