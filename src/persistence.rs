// File: src/persistence.rs
use crate::core::index::AffixIndex;
use crate::error::Result;
use log::info;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the index next to `path` and atomically moves it into place.
pub fn save_to_disk(index: &AffixIndex, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, index)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    info!("saved {} affixes to {}", index.len(), path.display());
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<AffixIndex> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let index: AffixIndex = bincode::deserialize_from(reader)?;
    info!("loaded {} affixes from {}", index.len(), path.display());
    Ok(index)
}
