//! End-to-end behaviour of the public engine API.

use affix_core::core::tokenizer::Tokenizer;
use affix_core::persistence::{load_from_disk, save_to_disk};
use affix_core::{AutocompleteEngine, CompletionResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fox_engine() -> AutocompleteEngine {
    let mut engine = AutocompleteEngine::default();
    engine.build_index(&["The Quick Brown Fox", "fox brown trick"], "a.txt");
    engine.build_index(&["A lazy dog sleeps", "quick thinking wins"], "b.txt");
    engine
}

fn expected(text: &str, source: &str, line: usize) -> CompletionResult {
    CompletionResult {
        completed_sentence: text.to_string(),
        source_id: source.to_string(),
        line_number: line,
    }
}

#[test]
fn typo_in_single_word_still_completes() {
    init_logging();
    let mut engine = AutocompleteEngine::default();
    engine.build_index(&["The Quick Brown Fox"], "a.txt");

    let results = engine.resolve_query("quikc", 5);
    assert_eq!(results, vec![expected("The Quick Brown Fox", "a.txt", 1)]);
}

#[test]
fn reversed_words_are_filtered_out() {
    init_logging();
    let results = fox_engine().resolve_query("brown fox", 5);
    assert_eq!(results, vec![expected("The Quick Brown Fox", "a.txt", 1)]);
}

#[test]
fn two_misspelled_words_resolve_independently() {
    init_logging();
    let results = fox_engine().resolve_query("brwn fxo", 5);
    assert_eq!(results, vec![expected("The Quick Brown Fox", "a.txt", 1)]);
}

#[test]
fn exact_key_only_returns_lines_containing_the_affix() {
    init_logging();
    let engine = fox_engine();
    let tokenizer = Tokenizer::new();

    for query in ["quick", "qu", "ick", "own", "la"] {
        let results = engine.resolve_query(query, 10);
        assert!(!results.is_empty(), "{} found nothing", query);
        for result in results {
            let words = tokenizer.tokenize(&result.completed_sentence);
            assert!(
                words.iter().any(|w| w.starts_with(query) || w.ends_with(query)),
                "{} does not hold '{}'",
                result.completed_sentence,
                query
            );
        }
    }
}

#[test]
fn mixed_case_and_punctuation_in_query() {
    init_logging();
    let results = fox_engine().resolve_query("  LAZY, dog!! ", 5);
    assert_eq!(results, vec![expected("A lazy dog sleeps", "b.txt", 1)]);
}

#[test]
fn result_count_never_exceeds_limit() {
    init_logging();
    let lines: Vec<String> = (1..=12).map(|i| format!("shared words number {}", i)).collect();
    let mut engine = AutocompleteEngine::default();
    engine.build_index(&lines, "many.txt");

    for k in [0, 1, 5, 12, 20] {
        let mut rng = StdRng::seed_from_u64(k as u64);
        let results = engine.resolve_query_with_rng("shared words", k, &mut rng);
        assert_eq!(results.len(), k.min(12));

        let distinct: HashSet<usize> = results.iter().map(|r| r.line_number).collect();
        assert_eq!(distinct.len(), results.len());
    }
}

#[test]
fn same_seed_samples_same_lines() {
    init_logging();
    let lines: Vec<String> = (1..=30).map(|i| format!("repeated text {}", i)).collect();
    let mut engine = AutocompleteEngine::default();
    engine.build_index(&lines, "many.txt");

    let first = engine.resolve_query_with_rng("repeated", 5, &mut StdRng::seed_from_u64(42));
    let second = engine.resolve_query_with_rng("repeated", 5, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
}

#[test]
fn persisted_index_answers_identically() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    let engine = fox_engine();
    save_to_disk(engine.index(), &path).unwrap();

    let mut restored = AutocompleteEngine::default();
    restored.replace_index(load_from_disk(&path).unwrap());
    for query in ["brown fox", "quikc", "lazy", "zzzzzz"] {
        assert_eq!(restored.resolve_query(query, 5), engine.resolve_query(query, 5));
    }
}
