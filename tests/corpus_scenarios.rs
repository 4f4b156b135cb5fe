//! End-to-end scenarios through the public facade: load a data file, search
//! it under each strategy, and compare against the documented answers.

use proptest::prelude::*;
use proptest::strategy::Strategy as _;
use sift::{normalize, tokenize, AllSeed, Corpus, Error, SearchOptions, Strategy};
use std::io::Write;

const VOCAB: [&str; 6] = ["cat", "Dog", "bird", "FISH", "erick", "a@b.com"];

fn write_data(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[test]
fn test_reference_scenario_from_file() {
    let file = write_data(&["the cat sat", "the dog ran", "cat and dog"]);
    let corpus = Corpus::load(file.path(), SearchOptions::default()).unwrap();

    assert_eq!(corpus.search("cat dog", Strategy::All).unwrap().positions(), vec![2]);
    assert_eq!(
        corpus.search("cat dog", Strategy::Any).unwrap().positions(),
        vec![0, 1, 2]
    );
    assert_eq!(corpus.search("cat", Strategy::None).unwrap().positions(), vec![1]);
    assert!(corpus.search("zzz", Strategy::All).unwrap().is_empty());
}

#[test]
fn test_legacy_scenario_from_file() {
    let file = write_data(&["the cat sat", "the dog ran", "cat and dog"]);
    let corpus = Corpus::load(file.path(), SearchOptions::legacy()).unwrap();

    assert_eq!(corpus.options().all_seed, AllSeed::Empty);
    assert!(corpus.search("cat dog", Strategy::All).unwrap().is_empty());
    assert_eq!(
        corpus.search("cat dog", Strategy::Any).unwrap().positions(),
        vec![0, 1, 2]
    );
    assert_eq!(corpus.search("cat", Strategy::None).unwrap().positions(), vec![1]);
}

#[test]
fn test_people_directory() {
    let file = write_data(&[
        "Dwight Joseph djo@gmail.com",
        "Rene Webb webb@gmail.com",
        "Katie Jacobs",
        "Erick Harrington harrington@gmail.com",
        "Myrtle Medina",
        "Erick Burgess",
    ]);
    let corpus = Corpus::load(file.path(), SearchOptions::default()).unwrap();

    let result = corpus.search("ERICK", Strategy::Any).unwrap();
    assert_eq!(
        result.records(),
        vec!["Erick Harrington harrington@gmail.com", "Erick Burgess"]
    );

    let result = corpus.search("erick harrington@gmail.com", Strategy::All).unwrap();
    assert_eq!(result.positions(), vec![3]);

    let result = corpus
        .search("djo@gmail.com webb@gmail.com harrington@gmail.com", Strategy::None)
        .unwrap();
    assert_eq!(
        result.records(),
        vec!["Katie Jacobs", "Myrtle Medina", "Erick Burgess"]
    );
}

#[test]
fn test_strategy_names_from_user_input() {
    let corpus = Corpus::from_records(vec!["alpha beta", "beta"], SearchOptions::default());

    let strategy: Strategy = "none".parse().unwrap();
    assert_eq!(corpus.search("alpha", strategy).unwrap().records(), vec!["beta"]);

    assert!(matches!(
        "EVERY".parse::<Strategy>(),
        Err(Error::UnknownStrategy(_))
    ));
}

/// Expected positions by scanning every loaded record
fn linear_scan(records: &[String], terms: &[String], strategy: Strategy) -> Vec<usize> {
    let wanted: Vec<String> = terms.iter().map(|t| normalize(t)).collect();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            let tokens = tokenize(record);
            let mut present = wanted.iter().map(|t| tokens.contains(t));
            match strategy {
                Strategy::All => present.all(|hit| hit),
                Strategy::Any => present.any(|hit| hit),
                Strategy::None => !present.any(|hit| hit),
            }
        })
        .map(|(pos, _)| pos)
        .collect()
}

fn line_strategy() -> impl proptest::strategy::Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB.to_vec()), 0..5)
        .prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_file_search_matches_linear_scan(
        lines in prop::collection::vec(line_strategy(), 0..8),
        terms in prop::collection::vec(prop::sample::select(VOCAB.to_vec()), 0..4),
    ) {
        let file = write_data(&lines.iter().map(String::as_str).collect::<Vec<_>>());
        let corpus = Corpus::load(file.path(), SearchOptions::default()).unwrap();
        prop_assert_eq!(corpus.len(), lines.len());

        let terms: Vec<String> = terms.into_iter().map(|t| t.to_uppercase()).collect();
        for strategy in Strategy::VARIANTS {
            let result = corpus.search(&terms.join(" "), strategy).unwrap();
            prop_assert_eq!(
                result.positions(),
                linear_scan(corpus.records(), &terms, strategy),
                "strategy {}", strategy
            );
        }
    }
}
