//! Test fixtures: a small catalog and a builder for valid save images.

use std::sync::Arc;

use crate::catalog::{Catalog, ChipInfo, PartInfo};
use crate::checksum;
use crate::folder::RawChip;
use crate::game::{GameInfo, Region, Version};
use crate::layout::folder::{
    CHIP_SIZE, CHIPS_PER_FOLDER, FOLDER_COUNT, FOLDERS_OFFSET, NO_REGULAR_CHIP,
    REGULAR_CHIP_OFFSET,
};
use crate::layout::header::{CHECKSUM_OFFSET, GAME_NAME_OFFSET, MASK_OFFSET};
use crate::layout::navicust::{
    COL, COMPRESSED, GRID_OFFSET, GRID_SIZE, ID_VARIANT, PLACEMENT_STRIDE, PLACEMENTS_OFFSET,
    ROT, ROW,
};
use crate::layout::sram::{DUMP_SIZE, IMAGE_SIZE, IMAGE_START};
use crate::mask::mask_save;
use crate::navicust::{self, Footprint, PlacedPart, Placement};
use crate::save::Save;

fn part(name: &str, squares: Footprint) -> Option<PartInfo> {
    Some(PartInfo {
        name: name.to_string(),
        color: None,
        squares,
    })
}

/// Parts: 1 = single core square, 2 = horizontal bar of three,
/// 3 = two core squares with one extension square.
pub fn test_catalog() -> Arc<Catalog> {
    let mut dot = [[0u8; 5]; 5];
    dot[2][2] = 1;

    let mut bar = [[0u8; 5]; 5];
    bar[2][1..4].copy_from_slice(&[1, 1, 1]);

    let mut hook = [[0u8; 5]; 5];
    hook[1][2] = 1;
    hook[2][2] = 1;
    hook[2][3] = 2;

    let chips = vec![
        None,
        Some(ChipInfo {
            name: "Cannon".to_string(),
            codes: "ABC*".to_string(),
        }),
        Some(ChipInfo {
            name: "Sword".to_string(),
            codes: "LSY".to_string(),
        }),
    ];
    let parts = vec![None, part("Dot", dot), part("Bar", bar), part("Hook", hook)];

    Arc::new(Catalog::new(chips, parts).expect("test catalog is valid"))
}

/// Builds plaintext images (and masked dumps) with a correct checksum.
pub struct SaveBuilder {
    game: GameInfo,
    mask_key: u32,
    placements: Vec<(usize, Placement)>,
    chips: Vec<(usize, usize, RawChip)>,
}

impl SaveBuilder {
    pub fn new() -> Self {
        Self {
            game: GameInfo {
                region: Region::Us,
                version: Version::Protoman,
            },
            mask_key: 0,
            placements: Vec::new(),
            chips: Vec::new(),
        }
    }

    pub fn game(mut self, region: Region, version: Version) -> Self {
        self.game = GameInfo { region, version };
        self
    }

    pub fn mask_key(mut self, key: u32) -> Self {
        self.mask_key = key;
        self
    }

    /// Store a placement; the grid is composed from parts the catalog knows.
    pub fn placement(mut self, slot: usize, placement: Placement) -> Self {
        self.placements.push((slot, placement));
        self
    }

    pub fn chip(mut self, folder_index: usize, chip_index: usize, chip: RawChip) -> Self {
        self.chips.push((folder_index, chip_index, chip));
        self
    }

    pub fn build_image(&self) -> Vec<u8> {
        let mut image = vec![0u8; IMAGE_SIZE];
        image[GAME_NAME_OFFSET..GAME_NAME_OFFSET + 20].copy_from_slice(self.game.game_name());
        image[MASK_OFFSET..MASK_OFFSET + 4].copy_from_slice(&self.mask_key.to_le_bytes());
        image[REGULAR_CHIP_OFFSET..REGULAR_CHIP_OFFSET + FOLDER_COUNT].fill(NO_REGULAR_CHIP);

        for &(folder_index, chip_index, chip) in &self.chips {
            let offset = FOLDERS_OFFSET
                + folder_index * CHIPS_PER_FOLDER * CHIP_SIZE
                + chip_index * CHIP_SIZE;
            let packed = chip.pack().expect("test chip fits");
            image[offset..offset + CHIP_SIZE].copy_from_slice(&packed.to_le_bytes());
        }

        for &(slot, p) in &self.placements {
            let record = PLACEMENTS_OFFSET + slot * PLACEMENT_STRIDE;
            image[record + ID_VARIANT] = (p.id << 2) | p.variant;
            image[record + COL] = p.col;
            image[record + ROW] = p.row;
            image[record + ROT] = p.rot;
            image[record + COMPRESSED] = p.compressed as u8;
        }

        let catalog = test_catalog();
        let mut placed: Vec<_> = self
            .placements
            .iter()
            .filter_map(|&(slot, placement)| {
                Some(PlacedPart {
                    slot,
                    placement,
                    footprint: &catalog.part(placement.id)?.squares,
                })
            })
            .collect();
        placed.sort_by_key(|p| p.slot);
        let grid = navicust::compose(placed);
        image[GRID_OFFSET..GRID_OFFSET + GRID_SIZE].copy_from_slice(grid.as_bytes());

        checksum::rebuild(&mut image, CHECKSUM_OFFSET, self.game.checksum_seed());
        image
    }

    pub fn build_dump(&self) -> Vec<u8> {
        let mut dump = vec![0u8; DUMP_SIZE];
        let image = &mut dump[IMAGE_START..IMAGE_START + IMAGE_SIZE];
        image.copy_from_slice(&self.build_image());
        mask_save(image, MASK_OFFSET);
        dump
    }

    pub fn build(&self) -> Save {
        Save::from_image(&self.build_image(), test_catalog()).expect("builder image is valid")
    }
}

impl Default for SaveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
