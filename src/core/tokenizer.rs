// File: src/core/tokenizer.rs
use regex::Regex;

const WORD_PATTERN: &str = "[a-z]+";

/// Splits text into maximal runs of lowercase ASCII letters.
/// Input is lowercased first; digits, punctuation and whitespace all act as separators.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word_re: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            word_re: Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.trim().to_lowercase();
        self.word_re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// The cleaned form of a line: its words joined by single spaces.
    pub fn clean(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
