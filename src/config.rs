// File: src/config.rs
use std::path::PathBuf;

pub const DEFAULT_RESULT_LIMIT: usize = 5;
pub const DEFAULT_INDEX_PATH: &str = "data.bin";
pub const DEFAULT_CORPUS_PATH: &str = "dataset.zip";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum completions returned by `AutocompleteEngine::complete`.
    pub result_limit: usize,
    /// Where the built index is cached between sessions.
    pub index_path: PathBuf,
    /// Archive, text file or directory the index is built from.
    pub corpus_path: PathBuf,
    /// Seeds `AutocompleteEngine::sampling_rng`, making over-limit sampling repeatable.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            seed: None,
        }
    }
}
