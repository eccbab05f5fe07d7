//! Show command implementation.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use bn5save_core::{Catalog, SaveSummary};

use super::load_save;

/// Run the show command
pub fn run(path: &Path, catalog: Arc<Catalog>, json: bool) -> Result<()> {
    let mut save = load_save(path, catalog)?;
    let summary = SaveSummary::collect(&mut save)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== Game ===");
    println!("ROM:      {}", summary.rom_name);
    println!("Region:   {}", summary.region);
    println!("Version:  {}", summary.version);
    println!("Checksum: 0x{:08X}", summary.checksum);
    println!("Navi:     {}", summary.current_navi);

    println!();
    println!("=== Folders ===");
    for (i, folder) in summary.folders.iter().enumerate() {
        let filled = folder.chips.iter().flatten().count();
        let marker = if i == summary.equipped_folder { "*" } else { " " };
        let regular = folder
            .regular_chip
            .map(|r| format!(", regular chip #{}", r))
            .unwrap_or_default();
        println!("{} [{}] {}/30 chips{}", marker, i, filled, regular);
    }

    println!();
    println!("=== Navicust ===");
    println!("{} parts placed", summary.navicust.parts.len());

    Ok(())
}
