// File: src/extract.rs
//! Feeds corpus documents into an [`AffixIndex`], one document at a time.
//! Zip archives contribute each of their `.txt` entries; plain files and
//! directories of `.txt` files are read straight from disk.

use crate::core::index::{build_index, AffixIndex};
use crate::core::tokenizer::Tokenizer;
use crate::error::{AutocompleteError, Result};
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

const TEXT_EXTENSION: &str = "txt";

/// Counts of what an ingestion pass added to the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub documents: usize,
    pub lines: usize,
}

impl IngestStats {
    fn add(&mut self, other: IngestStats) {
        self.documents += other.documents;
        self.lines += other.lines;
    }
}

fn has_text_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TEXT_EXTENSION)
}

fn ingest_bytes(
    bytes: &[u8],
    source_id: &str,
    index: &mut AffixIndex,
    tokenizer: &Tokenizer,
) -> IngestStats {
    let content = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = content.lines().collect();
    let indexed = build_index(index, tokenizer, &lines, source_id);
    IngestStats { documents: 1, lines: indexed }
}

/// Indexes every `.txt` entry of a zip archive; the entry name is the source id.
pub fn ingest_archive(
    path: &Path,
    index: &mut AffixIndex,
    tokenizer: &Tokenizer,
) -> Result<IngestStats> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let mut stats = IngestStats::default();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() || !entry.name().ends_with(".txt") {
            continue;
        }
        let name = entry.name().to_string();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes)?;
        stats.add(ingest_bytes(&bytes, &name, index, tokenizer));
    }

    info!(
        "indexed {} lines from {} documents in {}",
        stats.lines,
        stats.documents,
        path.display()
    );
    Ok(stats)
}

/// Indexes one plain text file; its file name is the source id.
pub fn ingest_text_file(
    path: &Path,
    index: &mut AffixIndex,
    tokenizer: &Tokenizer,
) -> Result<IngestStats> {
    let bytes = fs::read(path)?;
    let source_id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ingest_bytes(&bytes, &source_id, index, tokenizer))
}

/// Dispatches on the path: a `.zip` archive, a directory of `.txt` files, or a single file.
pub fn ingest_path(
    path: &Path,
    index: &mut AffixIndex,
    tokenizer: &Tokenizer,
) -> Result<IngestStats> {
    if path.is_dir() {
        let mut files: Vec<_> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && has_text_extension(p))
            .collect();
        files.sort();
        if files.is_empty() {
            warn!("no .{} files found in {}", TEXT_EXTENSION, path.display());
        }

        let mut stats = IngestStats::default();
        for file in files {
            stats.add(ingest_text_file(&file, index, tokenizer)?);
        }
        return Ok(stats);
    }

    if !path.is_file() {
        return Err(AutocompleteError::UnsupportedCorpus(path.to_path_buf()));
    }
    if path.extension().is_some_and(|ext| ext == "zip") {
        ingest_archive(path, index, tokenizer)
    } else {
        ingest_text_file(path, index, tokenizer)
    }
}
