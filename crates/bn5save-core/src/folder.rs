//! Chip folders, pack counts and folder selection
//!
//! Folder entries are packed little-endian u16 values: the low 9 bits hold the
//! chip id and the high 7 bits the code variant, which maps to a letter of
//! [`CHIP_CODES`]. A zero entry is an empty folder slot.

use serde::Serialize;

use crate::error::{Error, Result, check_index};
use crate::layout::folder::{
    CHIP_SIZE, CHIPS_PER_FOLDER, EQUIPPED_FOLDER_OFFSET, FOLDER_COUNT, FOLDERS_OFFSET,
    NO_REGULAR_CHIP, PACK_OFFSET, PACK_STRIDE, REGULAR_CHIP_OFFSET,
};
use crate::save::Save;

/// Code letters indexed by variant; `*` is the wildcard code.
pub const CHIP_CODES: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ*";

/// Largest chip id the 9-bit id field can hold
pub const MAX_CHIP_ID: u16 = 0x1ff;

/// Largest variant the 7-bit variant field can hold
const MAX_CHIP_VARIANT: u8 = 0x7f;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub id: u16,
    pub code: char,
}

/// A folder entry with its variant number instead of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawChip {
    pub id: u16,
    pub variant: u8,
}

impl RawChip {
    pub fn unpack(raw: u16) -> Option<Self> {
        if raw == 0 {
            return None;
        }
        Some(Self {
            id: raw & MAX_CHIP_ID,
            variant: (raw >> 9) as u8,
        })
    }

    pub fn pack(&self) -> Result<u16> {
        if self.id > MAX_CHIP_ID {
            return Err(Error::InvalidChipId(self.id));
        }
        if self.variant > MAX_CHIP_VARIANT {
            return Err(Error::InvalidChipVariant(self.variant));
        }
        Ok(self.id | ((self.variant as u16) << 9))
    }
}

/// Letter for a code variant
pub fn variant_to_code(variant: u8) -> Result<char> {
    CHIP_CODES
        .chars()
        .nth(variant as usize)
        .ok_or(Error::InvalidChipVariant(variant))
}

/// Code variant for a letter
pub fn code_to_variant(code: char) -> Result<u8> {
    CHIP_CODES
        .chars()
        .position(|c| c == code)
        .map(|i| i as u8)
        .ok_or(Error::InvalidChipCode(code))
}

impl TryFrom<RawChip> for Chip {
    type Error = Error;

    fn try_from(raw: RawChip) -> Result<Self> {
        Ok(Self {
            id: raw.id,
            code: variant_to_code(raw.variant)?,
        })
    }
}

impl TryFrom<Chip> for RawChip {
    type Error = Error;

    fn try_from(chip: Chip) -> Result<Self> {
        Ok(Self {
            id: chip.id,
            variant: code_to_variant(chip.code)?,
        })
    }
}

fn chip_offset(folder_index: usize, chip_index: usize) -> Result<usize> {
    check_index("Folder", folder_index, FOLDER_COUNT)?;
    check_index("Chip", chip_index, CHIPS_PER_FOLDER)?;
    Ok(FOLDERS_OFFSET + folder_index * (CHIPS_PER_FOLDER * CHIP_SIZE) + chip_index * CHIP_SIZE)
}

fn pack_offset(id: u16, variant: usize) -> Result<usize> {
    if id > MAX_CHIP_ID {
        return Err(Error::InvalidChipId(id));
    }
    check_index("Pack variant", variant, PACK_STRIDE)?;
    Ok(PACK_OFFSET + id as usize * PACK_STRIDE + variant)
}

pub struct ChipsView<'a> {
    pub(crate) save: &'a Save,
}

impl ChipsView<'_> {
    pub fn num_folders(&self) -> usize {
        FOLDER_COUNT
    }

    pub fn chips_per_folder(&self) -> usize {
        CHIPS_PER_FOLDER
    }

    pub fn equipped_folder_index(&self) -> usize {
        self.save.image()[EQUIPPED_FOLDER_OFFSET] as usize
    }

    pub fn regular_chip_index(&self, folder_index: usize) -> Result<Option<usize>> {
        check_index("Folder", folder_index, FOLDER_COUNT)?;
        let idx = self.save.image()[REGULAR_CHIP_OFFSET + folder_index];
        Ok((idx != NO_REGULAR_CHIP).then_some(idx as usize))
    }

    pub fn chip_raw(&self, folder_index: usize, chip_index: usize) -> Result<Option<RawChip>> {
        let offset = chip_offset(folder_index, chip_index)?;
        let image = self.save.image();
        Ok(RawChip::unpack(u16::from_le_bytes([
            image[offset],
            image[offset + 1],
        ])))
    }

    pub fn chip(&self, folder_index: usize, chip_index: usize) -> Result<Option<Chip>> {
        self.chip_raw(folder_index, chip_index)?
            .map(Chip::try_from)
            .transpose()
    }

    /// Every slot of a folder in order
    pub fn folder(&self, folder_index: usize) -> Result<Vec<Option<Chip>>> {
        (0..CHIPS_PER_FOLDER)
            .map(|i| self.chip(folder_index, i))
            .collect()
    }

    pub fn pack_count(&self, id: u16, variant: usize) -> Result<u8> {
        Ok(self.save.image()[pack_offset(id, variant)?])
    }
}

pub struct ChipsViewMut<'a> {
    pub(crate) save: &'a mut Save,
}

impl ChipsViewMut<'_> {
    pub fn set_equipped_folder(&mut self, folder_index: usize) -> Result<()> {
        check_index("Folder", folder_index, FOLDER_COUNT)?;
        self.save.image_mut()[EQUIPPED_FOLDER_OFFSET] = folder_index as u8;
        Ok(())
    }

    pub fn set_regular_chip_index(
        &mut self,
        folder_index: usize,
        chip_index: Option<usize>,
    ) -> Result<()> {
        check_index("Folder", folder_index, FOLDER_COUNT)?;
        let raw = match chip_index {
            Some(i) => {
                check_index("Chip", i, CHIPS_PER_FOLDER)?;
                i as u8
            }
            None => NO_REGULAR_CHIP,
        };
        self.save.image_mut()[REGULAR_CHIP_OFFSET + folder_index] = raw;
        Ok(())
    }

    pub fn set_chip_raw(&mut self, folder_index: usize, chip_index: usize, chip: RawChip) -> Result<()> {
        let offset = chip_offset(folder_index, chip_index)?;
        // Chip 0 would be indistinguishable from an empty slot
        if chip.id == 0 {
            return Err(Error::InvalidChipId(0));
        }
        let packed = chip.pack()?;
        self.save.image_mut()[offset..offset + CHIP_SIZE].copy_from_slice(&packed.to_le_bytes());
        Ok(())
    }

    pub fn set_chip(&mut self, folder_index: usize, chip_index: usize, chip: Chip) -> Result<()> {
        self.set_chip_raw(folder_index, chip_index, RawChip::try_from(chip)?)
    }

    pub fn clear_chip(&mut self, folder_index: usize, chip_index: usize) -> Result<()> {
        let offset = chip_offset(folder_index, chip_index)?;
        self.save.image_mut()[offset..offset + CHIP_SIZE].fill(0);
        Ok(())
    }

    pub fn set_pack_count(&mut self, id: u16, variant: usize, count: u8) -> Result<()> {
        let offset = pack_offset(id, variant)?;
        self.save.image_mut()[offset] = count;
        Ok(())
    }
}
