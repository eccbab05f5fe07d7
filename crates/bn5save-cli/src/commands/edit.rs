//! Edit commands: load a dump, change one field, write the dump back.

use std::sync::Arc;

use anyhow::Result;
use bn5save_core::{Catalog, Chip, Placement, Save};
use tracing::{info, warn};

use super::{load_save, write_save};
use crate::cli::EditTarget;

fn edit<F>(target: &EditTarget, catalog: Arc<Catalog>, f: F) -> Result<()>
where
    F: FnOnce(&mut Save) -> bn5save_core::Result<()>,
{
    let mut save = load_save(&target.save, catalog)?;
    f(&mut save)?;
    write_save(&mut save, target.output_path())
}

pub fn set_chip(
    target: &EditTarget,
    catalog: Arc<Catalog>,
    folder: usize,
    slot: usize,
    id: u16,
    code: char,
) -> Result<()> {
    match catalog.chip(id) {
        Some(info) if !info.codes.is_empty() && !info.codes.contains(code) => {
            warn!("{} does not normally come in code {}", info.name, code)
        }
        None => warn!("Chip #{} is not in the catalog", id),
        _ => {}
    }

    edit(target, catalog, |save| {
        save.chips_mut().set_chip(folder, slot, Chip { id, code })
    })?;
    info!("Folder {} slot {}: chip #{} {}", folder, slot, id, code);
    Ok(())
}

pub fn clear_chip(target: &EditTarget, catalog: Arc<Catalog>, folder: usize, slot: usize) -> Result<()> {
    edit(target, catalog, |save| save.chips_mut().clear_chip(folder, slot))?;
    info!("Folder {} slot {}: cleared", folder, slot);
    Ok(())
}

pub fn equip_folder(target: &EditTarget, catalog: Arc<Catalog>, folder: usize) -> Result<()> {
    edit(target, catalog, |save| save.chips_mut().set_equipped_folder(folder))?;
    info!("Equipped folder {}", folder);
    Ok(())
}

pub fn set_pack_count(
    target: &EditTarget,
    catalog: Arc<Catalog>,
    id: u16,
    variant: usize,
    count: u8,
) -> Result<()> {
    edit(target, catalog, |save| {
        save.chips_mut().set_pack_count(id, variant, count)
    })?;
    info!("Pack count of chip #{} variant {}: {}", id, variant, count);
    Ok(())
}

pub fn set_part(
    target: &EditTarget,
    catalog: Arc<Catalog>,
    slot: usize,
    placement: Placement,
) -> Result<()> {
    edit(target, catalog, |save| {
        save.navicust_mut().set_placement(slot, placement)
    })?;
    info!("Navicust slot {}: part #{}", slot, placement.id);
    Ok(())
}

pub fn clear_part(target: &EditTarget, catalog: Arc<Catalog>, slot: usize) -> Result<()> {
    edit(target, catalog, |save| save.navicust_mut().clear_placement(slot))?;
    info!("Navicust slot {}: cleared", slot);
    Ok(())
}
