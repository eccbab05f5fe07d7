//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod edit;
pub mod folder;
pub mod hex_utils;
pub mod hexdump;
pub mod navicust;
pub mod show;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use bn5save_core::{Catalog, Save};
use tempfile::NamedTempFile;
use tracing::info;

/// Read and decode a dump from disk
pub fn load_save(path: &Path, catalog: Arc<Catalog>) -> Result<Save> {
    let dump = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let save = Save::from_sram_dump(&dump, catalog)
        .with_context(|| format!("Failed to load save {}", path.display()))?;
    info!(
        "Loaded {} ({} {})",
        path.display(),
        save.game_info().rom_name(),
        save.game_info().version
    );
    Ok(save)
}

/// Re-encode a save (checksum included) and write it to disk.
///
/// The dump goes to a temporary file next to `path` which then replaces it,
/// so an interrupted write leaves the previous file intact.
pub fn write_save(save: &mut Save, path: &Path) -> Result<()> {
    let dump = save.to_sram_dump();
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(&dump)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    info!(
        "Wrote {} (checksum {:#010x})",
        path.display(),
        save.checksum()
    );
    Ok(())
}
