// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures from the collaborators around the engine. Queries never fail;
/// only loading, saving and corpus extraction surface errors.
#[derive(Error, Debug)]
pub enum AutocompleteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("index encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("failed to persist index: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("unsupported corpus path: {}", .0.display())]
    UnsupportedCorpus(PathBuf),
}

pub type Result<T> = std::result::Result<T, AutocompleteError>;
