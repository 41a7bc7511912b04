// File: src/core/query.rs
use crate::core::index::AffixIndex;
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{CompletionResult, LineRecord};
use crate::fuzzy::correction::best_correction;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Read-only matcher over a built index. Holds no state between queries.
pub struct QueryEngine<'a> {
    index: &'a AffixIndex,
    tokenizer: &'a Tokenizer,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a AffixIndex, tokenizer: &'a Tokenizer) -> Self {
        Self { index, tokenizer }
    }

    /// The token itself when it is a key, else its best single-edit correction.
    pub fn resolve_token(&self, token: &str) -> Option<String> {
        if self.index.contains(token) {
            debug!("'{}' is an exact key", token);
            return Some(token.to_string());
        }
        let candidate = best_correction(token, self.index)?;
        debug!("'{}' corrected to '{}' (score {})", token, candidate.text, candidate.score);
        Some(candidate.text)
    }

    /// Up to `k` lines matching every word of `query`, in order for multi-word queries.
    ///
    /// Any word that can neither be found nor corrected empties the result.
    /// When more than `k` lines qualify, `rng` picks which ones are returned.
    pub fn resolve_query<R: Rng + ?Sized>(
        &self,
        query: &str,
        k: usize,
        rng: &mut R,
    ) -> Vec<CompletionResult> {
        let tokens = self.tokenizer.tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut resolved = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match self.resolve_token(token) {
                Some(word) => resolved.push(word),
                None => {
                    debug!("'{}' has no single-edit correction; query dropped", token);
                    return Vec::new();
                }
            }
        }

        let mut lines = self.candidate_lines(&resolved);
        if resolved.len() > 1 {
            lines.retain(|record| {
                occurs_in_order(&resolved, &self.tokenizer.tokenize(&record.text))
            });
        }

        if lines.len() > k {
            lines = lines.choose_multiple(rng, k).copied().collect();
        }
        lines.into_iter().map(CompletionResult::from).collect()
    }

    /// Lines present under every resolved token, deduplicated, in first-token order.
    fn candidate_lines(&self, resolved: &[String]) -> Vec<&'a LineRecord> {
        let index: &'a AffixIndex = self.index;
        let mut running: Vec<&'a LineRecord> = Vec::new();

        for (i, token) in resolved.iter().enumerate() {
            let records = index.lines_for(token);
            if i == 0 {
                let mut seen = HashSet::new();
                running = records.iter().filter(|record| seen.insert(*record)).collect();
            } else {
                let present: HashSet<&LineRecord> = records.iter().collect();
                running.retain(|record| present.contains(record));
            }
            if running.is_empty() {
                break;
            }
        }
        running
    }
}

/// Whether the query tokens appear as substrings of consecutive line tokens.
///
/// The first line token containing the first query token anchors the run; each
/// later query token must sit inside the next line token.
pub fn occurs_in_order<S: AsRef<str>>(query_tokens: &[S], line_tokens: &[S]) -> bool {
    let Some((first, rest)) = query_tokens.split_first() else {
        return true;
    };
    let Some(anchor) = line_tokens
        .iter()
        .position(|word| word.as_ref().contains(first.as_ref()))
    else {
        return false;
    };

    let following = &line_tokens[anchor + 1..];
    rest.len() <= following.len()
        && rest
            .iter()
            .zip(following)
            .all(|(query, word)| word.as_ref().contains(query.as_ref()))
}
