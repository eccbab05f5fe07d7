//! Serializable snapshot of a save for display and JSON export

use serde::Serialize;

use crate::error::Result;
use crate::folder::{RawChip, variant_to_code};
use crate::game::{Region, Version};
use crate::navicust::{NavicustGrid, Placement};
use crate::save::Save;

#[derive(Debug, Clone, Serialize)]
pub struct SaveSummary {
    pub rom_name: &'static str,
    pub region: Region,
    pub version: Version,
    pub checksum: u32,
    pub current_navi: u8,
    pub equipped_folder: usize,
    pub folders: Vec<FolderSummary>,
    pub navicust: NavicustSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct FolderSummary {
    pub regular_chip: Option<usize>,
    pub chips: Vec<Option<ChipSummary>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChipSummary {
    pub id: u16,
    pub variant: u8,
    /// Code letter, `None` when the variant is past the alphabet
    pub code: Option<char>,
    /// Catalog name, if the catalog knows the chip
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavicustSummary {
    pub parts: Vec<PartSummary>,
    pub grid: Vec<Vec<Option<usize>>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartSummary {
    pub slot: usize,
    pub name: Option<String>,
    #[serde(flatten)]
    pub placement: Placement,
}

impl SaveSummary {
    /// Snapshot a save, recomposing derived data first so the checksum and
    /// grid are current.
    pub fn collect(save: &mut Save) -> Result<Self> {
        save.rebuild();

        let catalog = save.catalog();
        let chips = save.chips();
        let folders = (0..chips.num_folders())
            .map(|f| {
                Ok(FolderSummary {
                    regular_chip: chips.regular_chip_index(f)?,
                    chips: (0..chips.chips_per_folder())
                        .map(|i| {
                            Ok(chips.chip_raw(f, i)?.map(|RawChip { id, variant }| ChipSummary {
                                id,
                                variant,
                                code: variant_to_code(variant).ok(),
                                name: catalog.chip(id).map(|info| info.name.clone()),
                            }))
                        })
                        .collect::<Result<_>>()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let navicust = save.navicust();
        let parts = navicust
            .placements()
            .map(|(slot, placement)| PartSummary {
                slot,
                name: catalog.part(placement.id).map(|info| info.name.clone()),
                placement,
            })
            .collect();

        let game = save.game_info();
        Ok(Self {
            rom_name: game.rom_name(),
            region: game.region,
            version: game.version,
            checksum: save.checksum(),
            current_navi: save.current_navi(),
            equipped_folder: chips.equipped_folder_index(),
            folders,
            navicust: NavicustSummary {
                parts,
                grid: grid_rows(&navicust.precomposed()),
            },
        })
    }
}

fn grid_rows(grid: &NavicustGrid) -> Vec<Vec<Option<usize>>> {
    grid.rows()
        .map(|row| row.iter().map(|&v| v.checked_sub(1).map(usize::from)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SaveBuilder;

    #[test]
    fn test_collect_summary() {
        let mut save = SaveBuilder::new()
            .chip(0, 0, RawChip { id: 1, variant: 2 })
            .chip(0, 1, RawChip { id: 300, variant: 0 })
            .placement(
                3,
                Placement {
                    id: 2,
                    variant: 1,
                    col: 2,
                    row: 2,
                    rot: 0,
                    compressed: false,
                },
            )
            .build();

        let summary = SaveSummary::collect(&mut save).unwrap();
        assert_eq!(summary.rom_name, "MEGAMAN5_TP_BRBE");
        assert_eq!(summary.folders.len(), 3);

        let first = summary.folders[0].chips[0].as_ref().unwrap();
        assert_eq!(first.code, Some('C'));
        assert_eq!(first.variant, 2);
        assert_eq!(first.name.as_deref(), Some("Cannon"));
        let second = summary.folders[0].chips[1].as_ref().unwrap();
        assert_eq!(second.name, None);

        assert_eq!(summary.navicust.parts.len(), 1);
        assert_eq!(summary.navicust.parts[0].name.as_deref(), Some("Bar"));
        assert_eq!(summary.navicust.grid[2], vec![None, Some(3), Some(3), Some(3), None]);
    }

    #[test]
    fn test_collect_keeps_chip_without_code_letter() {
        let mut save = SaveBuilder::new()
            .chip(0, 0, RawChip { id: 7, variant: 30 })
            .build();

        let summary = SaveSummary::collect(&mut save).unwrap();
        let chip = summary.folders[0].chips[0].as_ref().unwrap();
        assert_eq!(chip.id, 7);
        assert_eq!(chip.variant, 30);
        assert_eq!(chip.code, None);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["folders"][0]["chips"][0]["code"], serde_json::Value::Null);
        assert_eq!(json["folders"][0]["chips"][0]["variant"], 30);
    }

    #[test]
    fn test_summary_json() {
        let mut save = SaveBuilder::new().build();
        let summary = SaveSummary::collect(&mut save).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["region"], "US");
        assert_eq!(json["version"], "Protoman");
        assert_eq!(json["folders"][0]["regular_chip"], serde_json::Value::Null);
        assert_eq!(json["navicust"]["grid"].as_array().unwrap().len(), 5);
    }
}
