// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod fuzzy;
pub mod persistence;

pub use crate::config::EngineConfig;
pub use crate::core::engine::AutocompleteEngine;
pub use crate::core::index::AffixIndex;
pub use crate::core::types::{CompletionResult, LineRecord};
pub use crate::error::{AutocompleteError, Result};
