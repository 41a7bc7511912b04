// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source id used when a document arrives without a name.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// One physical line of one source document.
/// Records are compared by full value, so the same line reached through
/// different affixes collapses to a single entry under set semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRecord {
    /// The original, uncleaned line text.
    pub text: String,
    /// 1-based position of the line within its document.
    pub line_number: usize,
    pub source_id: String,
}

impl LineRecord {
    pub fn new(text: impl Into<String>, line_number: usize, source_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            line_number,
            source_id: source_id.into(),
        }
    }
}

/// A completion handed back to the caller. Carries no score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    pub completed_sentence: String,
    pub source_id: String,
    pub line_number: usize,
}

impl From<&LineRecord> for CompletionResult {
    fn from(record: &LineRecord) -> Self {
        Self {
            completed_sentence: record.text.clone(),
            source_id: record.source_id.clone(),
            line_number: record.line_number,
        }
    }
}

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " {} (Filename: {} Line: {})",
            self.completed_sentence, self.source_id, self.line_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_copies_record_fields() {
        let record = LineRecord::new("The Quick Brown Fox", 1, "a.txt");
        let completion = CompletionResult::from(&record);
        assert_eq!(completion.completed_sentence, "The Quick Brown Fox");
        assert_eq!(completion.source_id, "a.txt");
        assert_eq!(completion.line_number, 1);
    }

    #[test]
    fn completion_display_format() {
        let completion = CompletionResult::from(&LineRecord::new("hello world", 7, "b.txt"));
        assert_eq!(completion.to_string(), " hello world (Filename: b.txt Line: 7)");
    }
}
