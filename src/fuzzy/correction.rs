// File: src/fuzzy/correction.rs
use crate::core::index::AffixIndex;
use log::trace;

/// Generators stop after this many accepted candidates (insertion is uncapped).
pub const MAX_CANDIDATES: usize = 5;

const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';
const ADDITION_PENALTIES: [i64; 4] = [10, 8, 6, 4];

/// A corrected string that exists as an index key, with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub score: i64,
}

impl Candidate {
    fn new(text: String, score: i64) -> Self {
        Self { text, score }
    }
}

/// The single-edit correction strategies. Each one proposes only strings that
/// are exactly one edit away from its input and present in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    Substitution,
    Deletion,
    Insertion,
}

impl Correction {
    /// Pooling order; earlier strategies win ties.
    pub const ALL: [Correction; 3] = [
        Correction::Substitution,
        Correction::Deletion,
        Correction::Insertion,
    ];

    /// Proposes scored corrections for `text`.
    ///
    /// Deletion and insertion treat `text` as a single token. Substitution
    /// treats it as a context of whitespace-separated words and only fires
    /// when exactly one of them is unknown.
    pub fn propose(self, text: &str, index: &AffixIndex) -> Vec<Candidate> {
        match self {
            Correction::Substitution => substitutions(text, index),
            Correction::Deletion => deletions(text, index),
            Correction::Insertion => insertions(text, index),
        }
    }
}

/// Pools candidates from every strategy and keeps the highest score.
/// On equal scores the first candidate produced wins.
pub fn best_correction(token: &str, index: &AffixIndex) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for strategy in Correction::ALL {
        let candidates = strategy.propose(token, index);
        trace!("{:?} proposed {} candidates for '{}'", strategy, candidates.len(), token);
        for candidate in candidates {
            let better = best.as_ref().map_or(true, |b| candidate.score > b.score);
            if better {
                best = Some(candidate);
            }
        }
    }
    best
}

/// Deletions nearer the start of a token cost more.
pub(crate) fn deletion_penalty(position: usize) -> i64 {
    (10 - 2 * position as i64).max(2)
}

/// Score for inserting at `position`, given the best achievable score.
pub(crate) fn addition_score(position: usize, max_score: i64) -> i64 {
    let penalty = ADDITION_PENALTIES.get(position).copied().unwrap_or(2);
    max_score - penalty
}

/// Substitutions within the first four characters cost more.
pub(crate) fn substitution_penalty(position: usize) -> i64 {
    if position > 3 {
        1
    } else {
        5 - position as i64
    }
}

fn deletions(token: &str, index: &AffixIndex) -> Vec<Candidate> {
    let chars: Vec<char> = token.chars().collect();
    let base = (chars.len() as i64 - 1) * 2;
    let mut found = Vec::new();

    // Position == len removes nothing; the token itself is never a key here.
    for i in (0..=chars.len()).rev() {
        let tail = chars.get(i + 1..).unwrap_or_default();
        let candidate: String = chars[..i].iter().chain(tail).collect();
        if index.contains(&candidate) {
            found.push(Candidate::new(candidate, base - deletion_penalty(i)));
            if found.len() == MAX_CANDIDATES {
                break;
            }
        }
    }
    found
}

fn insertions(token: &str, index: &AffixIndex) -> Vec<Candidate> {
    let chars: Vec<char> = token.chars().collect();
    let max_score = chars.len() as i64 * 2;
    let mut found = Vec::new();

    for letter in ALPHABET {
        for i in (0..=chars.len()).rev() {
            let candidate: String = chars[..i]
                .iter()
                .chain(std::iter::once(&letter))
                .chain(&chars[i..])
                .collect();
            if index.contains(&candidate) {
                found.push(Candidate::new(candidate, addition_score(i, max_score)));
            }
        }
    }
    found
}

/// (start, length) in chars of each whitespace-separated word.
fn word_spans(chars: &[char]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in chars.iter().enumerate() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                spans.push((s, i - s));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, chars.len() - s));
    }
    spans
}

/// Span of the only unknown word in the context, or None when there are zero or several.
fn single_unknown_span(chars: &[char], index: &AffixIndex) -> Option<(usize, usize)> {
    let mut unknown = word_spans(chars).into_iter().filter(|&(start, len)| {
        let word: String = chars[start..start + len].iter().collect();
        !index.contains(&word)
    });
    let first = unknown.next()?;
    match unknown.next() {
        Some(_) => None,
        None => Some(first),
    }
}

fn substitutions(subtext: &str, index: &AffixIndex) -> Vec<Candidate> {
    let mut chars: Vec<char> = subtext.chars().collect();
    let Some((start, len)) = single_unknown_span(&chars, index) else {
        return Vec::new();
    };

    let base = (chars.len() as i64 - 1) * 2;
    let end = start + len - 1;
    let mut found = Vec::new();

    // Offset counts back from the word's last char, so positions run left to right.
    'positions: for offset in (0..len).rev() {
        let position = end - offset;
        let original = chars[position];
        for letter in ALPHABET.filter(|&l| l != original) {
            chars[position] = letter;
            let candidate: String = chars.iter().collect();
            if index.contains(&candidate) {
                found.push(Candidate::new(candidate, base - substitution_penalty(position)));
                if found.len() == MAX_CANDIDATES {
                    break 'positions;
                }
            }
        }
        chars[position] = original;
    }
    found
}
