//! Folder command implementation.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use bn5save_core::Catalog;

use super::load_save;

/// Run the folder command
pub fn run(path: &Path, catalog: Arc<Catalog>, folder: Option<usize>) -> Result<()> {
    let save = load_save(path, catalog)?;
    let chips = save.chips();
    let folder_index = folder.unwrap_or_else(|| chips.equipped_folder_index());
    let regular = chips.regular_chip_index(folder_index)?;

    println!(
        "=== Folder {}{} ===",
        folder_index,
        if folder_index == chips.equipped_folder_index() {
            " (equipped)"
        } else {
            ""
        }
    );

    for slot in 0..chips.chips_per_folder() {
        let line = match chips.chip(folder_index, slot) {
            Ok(Some(chip)) => {
                let name = save
                    .catalog()
                    .chip(chip.id)
                    .map(|info| info.name.as_str())
                    .unwrap_or("???");
                format!("{:<16} {}  (#{})", name, chip.code, chip.id)
            }
            Ok(None) => "-".to_string(),
            // A code variant without a letter is shown raw rather than aborting the listing
            Err(e) => match chips.chip_raw(folder_index, slot)? {
                Some(raw) => format!("#{} variant {} ({})", raw.id, raw.variant, e),
                None => e.to_string(),
            },
        };
        let marker = if regular == Some(slot) { "R" } else { " " };
        println!("{} [{:02}] {}", marker, slot, line);
    }

    Ok(())
}
