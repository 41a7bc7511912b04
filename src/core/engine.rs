use crate::config::EngineConfig;
use crate::core::index::{build_index, AffixIndex};
use crate::core::query::QueryEngine;
use crate::core::tokenizer::Tokenizer;
use crate::core::types::CompletionResult;
use crate::error::Result;
use crate::extract::{ingest_path, IngestStats};
use crate::persistence::{load_from_disk, save_to_disk};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// The session owns the index; queries borrow it through a QueryEngine.
pub struct AutocompleteEngine {
    index: AffixIndex,
    tokenizer: Tokenizer,
    config: EngineConfig,
}

impl AutocompleteEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            index: AffixIndex::new(),
            tokenizer: Tokenizer::new(),
            config,
        }
    }

    /// Loads the cached index when present, otherwise builds it from the
    /// corpus and caches it. `rebuild` forces the second path.
    pub fn open(config: EngineConfig, rebuild: bool) -> Result<Self> {
        let mut engine = Self::new(config);
        if !rebuild && engine.config.index_path.exists() {
            engine.index = load_from_disk(&engine.config.index_path)?;
            return Ok(engine);
        }

        info!("processing corpus {}", engine.config.corpus_path.display());
        let corpus = engine.config.corpus_path.clone();
        engine.ingest(&corpus)?;
        engine.save_index()?;
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Adds one document's lines to the index. Additive across calls.
    pub fn build_index<S: AsRef<str>>(&mut self, lines: &[S], source_id: &str) -> usize {
        build_index(&mut self.index, &self.tokenizer, lines, source_id)
    }

    pub fn ingest(&mut self, path: &std::path::Path) -> Result<IngestStats> {
        ingest_path(path, &mut self.index, &self.tokenizer)
    }

    pub fn index(&self) -> &AffixIndex {
        &self.index
    }

    pub fn replace_index(&mut self, index: AffixIndex) {
        self.index = index;
    }

    pub fn query_engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.index, &self.tokenizer)
    }

    pub fn resolve_query(&self, query: &str, k: usize) -> Vec<CompletionResult> {
        self.resolve_query_with_rng(query, k, &mut rand::thread_rng())
    }

    pub fn resolve_query_with_rng<R: Rng + ?Sized>(
        &self,
        query: &str,
        k: usize,
        rng: &mut R,
    ) -> Vec<CompletionResult> {
        self.query_engine().resolve_query(query, k, rng)
    }

    /// RNG for over-limit sampling: seeded from the config when set, else from entropy.
    pub fn sampling_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Resolves `query` with the configured result limit.
    pub fn complete<R: Rng + ?Sized>(&self, query: &str, rng: &mut R) -> Vec<CompletionResult> {
        self.resolve_query_with_rng(query, self.config.result_limit, rng)
    }

    pub fn save_index(&self) -> Result<()> {
        save_to_disk(&self.index, &self.config.index_path)
    }
}

impl Default for AutocompleteEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
