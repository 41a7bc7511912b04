// --- File: src/core/index.rs
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{LineRecord, UNKNOWN_SOURCE};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Shortest affix that gets its own key.
pub const MIN_AFFIX_LEN: usize = 2;

/// Inverted index from word affix (prefix or suffix, length >= 2) to the lines
/// holding a word with that affix.
///
/// The key set doubles as the vocabulary of "known" strings for correction: a
/// string is known when some corpus word starts or ends with it, which lets
/// half-typed words resolve during interactive querying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffixIndex {
    entries: HashMap<String, Vec<LineRecord>>,
}

impl AffixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, affix: &str) -> bool {
        self.entries.contains_key(affix)
    }

    /// Records for an affix in insertion order; empty when the affix is unknown.
    pub fn lines_for(&self, affix: &str) -> &[LineRecord] {
        self.entries.get(affix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct affix keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn affixes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn push(&mut self, affix: String, record: LineRecord) {
        self.entries.entry(affix).or_default().push(record);
    }
}

/// Every prefix and suffix of length 2..=len for each word, deduplicated.
/// Words are ASCII so byte slicing stays on char boundaries.
pub fn line_affixes<S: AsRef<str>>(words: &[S]) -> HashSet<String> {
    let mut affixes = HashSet::new();
    for word in words {
        let word = word.as_ref();
        let n = word.len();
        for j in MIN_AFFIX_LEN..=n {
            affixes.insert(word[..j].to_string());
            affixes.insert(word[n - j..].to_string());
        }
    }
    affixes
}

/// Adds one document's lines to `index`. Building is additive: calling this
/// twice with the same document records every line twice.
///
/// Lines without any letters are skipped. Returns the number of lines indexed.
pub fn build_index<S: AsRef<str>>(
    index: &mut AffixIndex,
    tokenizer: &Tokenizer,
    lines: &[S],
    source_id: &str,
) -> usize {
    let source_id = if source_id.is_empty() { UNKNOWN_SOURCE } else { source_id };
    let mut indexed = 0;

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let words = tokenizer.tokenize(line);
        if words.is_empty() {
            continue;
        }

        let record = LineRecord::new(line, i + 1, source_id);
        for affix in line_affixes(&words) {
            index.push(affix, record.clone());
        }
        indexed += 1;
    }

    info!("processed file {} ({} lines)", source_id, indexed);
    indexed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(lines: &[&str], source: &str) -> AffixIndex {
        let mut index = AffixIndex::new();
        build_index(&mut index, &Tokenizer::new(), lines, source);
        index
    }

    #[test]
    fn affixes_cover_prefixes_and_suffixes() {
        let affixes = line_affixes(&["fox"]);
        let expected: HashSet<String> =
            ["fo", "fox", "ox"].iter().map(|s| s.to_string()).collect();
        assert_eq!(affixes, expected);
    }

    #[test]
    fn single_letter_words_have_no_affixes() {
        assert!(line_affixes(&["a", "i"]).is_empty());
    }

    #[test]
    fn every_full_word_is_a_key() {
        let index = index_of(&["The Quick Brown Fox", "jumps over 3 lazy dogs!"], "a.txt");
        for word in ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dogs"] {
            assert!(index.contains(word), "missing {}", word);
        }
        assert!(index.contains("qu"));
        assert!(index.contains("ick"));
        assert!(!index.contains("uic"));
    }

    #[test]
    fn records_keep_original_text_and_line_number() {
        let index = index_of(&["", "Hello, World!"], "greet.txt");
        let records = index.lines_for("hello");
        assert_eq!(records, &[LineRecord::new("Hello, World!", 2, "greet.txt")]);
    }

    #[test]
    fn lines_without_letters_are_skipped() {
        let mut index = AffixIndex::new();
        let indexed = build_index(&mut index, &Tokenizer::new(), &["123 456", "!!!", ""], "x");
        assert_eq!(indexed, 0);
        assert!(index.is_empty());
    }

    #[test]
    fn indexed_count_matches_lines_with_words() {
        let mut index = AffixIndex::new();
        let lines = ["first line", "", "42", "second, line", "  "];
        let indexed = build_index(&mut index, &Tokenizer::new(), &lines, "notes.txt");
        assert_eq!(indexed, 2);
        let numbers: Vec<usize> = index.lines_for("line").iter().map(|r| r.line_number).collect();
        assert_eq!(numbers, vec![1, 4]);
    }

    #[test]
    fn affix_appears_once_per_line() {
        // "ab" is both a prefix of "abc" and a suffix of "cab".
        let index = index_of(&["abc cab"], "x");
        assert_eq!(index.lines_for("ab").len(), 1);
    }

    #[test]
    fn missing_source_defaults_to_unknown() {
        let index = index_of(&["hello"], "");
        assert_eq!(index.lines_for("hello")[0].source_id, UNKNOWN_SOURCE);
    }

    #[test]
    fn building_accumulates() {
        let mut index = AffixIndex::new();
        let tokenizer = Tokenizer::new();
        build_index(&mut index, &tokenizer, &["hello there"], "a.txt");
        build_index(&mut index, &tokenizer, &["hello again"], "b.txt");
        assert_eq!(index.lines_for("hello").len(), 2);
        assert_eq!(index.lines_for("again").len(), 1);
    }

    #[test]
    fn unknown_affix_has_no_lines() {
        let index = index_of(&["hello"], "a.txt");
        assert!(index.lines_for("zz").is_empty());
    }
}
