//! Save image accessor
//!
//! [`Save`] owns the plaintext image and is the only way to reach it. Field
//! access goes through short-lived views borrowed from the save:
//!
//! ```ignore
//! let mut save = Save::from_sram_dump(&dump, catalog)?;
//! let chip = save.chips().chip(0, 0)?;
//! save.navicust_mut().set_placement(0, placement)?;
//! let dump = save.to_sram_dump();
//! ```
//!
//! The navicust grid is derived state. Placement writes mark it dirty and it
//! is recomposed before anything that depends on it (the grid itself, the
//! checksum, an export) is read.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::checksum;
use crate::error::{Error, Result};
use crate::folder::{ChipsView, ChipsViewMut};
use crate::game::GameInfo;
use crate::layout::header::{
    CHECKSUM_OFFSET, CURRENT_NAVI_OFFSET, GAME_NAME_OFFSET, GAME_NAME_SIZE, MASK_OFFSET,
};
use crate::layout::navicust::PLACEMENT_COUNT;
use crate::layout::sram::{DUMP_SIZE, IMAGE_SIZE, IMAGE_START};
use crate::mask::mask_save;
use crate::navicust::{self, NavicustGrid, NavicustView, NavicustViewMut};

#[derive(Clone)]
pub struct Save {
    buf: Box<[u8; IMAGE_SIZE]>,
    game_info: GameInfo,
    catalog: Arc<Catalog>,
    navicust_dirty: bool,
}

impl std::fmt::Debug for Save {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Save")
            .field("game_info", &self.game_info)
            .field("checksum", &format_args!("{:#010x}", self.checksum()))
            .field("navicust_dirty", &self.navicust_dirty)
            .finish_non_exhaustive()
    }
}

impl Save {
    /// Load a full battery-backup dump.
    pub fn from_sram_dump(dump: &[u8], catalog: Arc<Catalog>) -> Result<Self> {
        if dump.len() != DUMP_SIZE {
            return Err(Error::InvalidSize {
                expected: DUMP_SIZE,
                actual: dump.len(),
            });
        }
        let mut image = dump[IMAGE_START..IMAGE_START + IMAGE_SIZE].to_vec();
        mask_save(&mut image, MASK_OFFSET);
        Self::from_image(&image, catalog)
    }

    /// Load an already unmasked save image.
    pub fn from_image(image: &[u8], catalog: Arc<Catalog>) -> Result<Self> {
        let buf: Box<[u8; IMAGE_SIZE]> = image
            .to_vec()
            .into_boxed_slice()
            .try_into()
            .map_err(|_| Error::InvalidSize {
                expected: IMAGE_SIZE,
                actual: image.len(),
            })?;

        let game_info =
            GameInfo::from_game_name(&buf[GAME_NAME_OFFSET..GAME_NAME_OFFSET + GAME_NAME_SIZE])?;

        let seed = game_info.checksum_seed();
        if !checksum::verify(&buf[..], CHECKSUM_OFFSET, seed) {
            return Err(Error::ChecksumMismatch {
                actual: checksum::stored(&buf[..], CHECKSUM_OFFSET),
                expected: checksum::compute(&buf[..], CHECKSUM_OFFSET, seed),
            });
        }

        for slot in 0..PLACEMENT_COUNT {
            if let Some(p) = navicust::read_placement(&buf[..], slot) {
                if catalog.part(p.id).is_none() {
                    return Err(Error::UnknownPart(p.id));
                }
            }
        }

        debug!(
            "Loaded {} save ({}), checksum {:#010x}",
            game_info.rom_name(),
            game_info.region,
            checksum::stored(&buf[..], CHECKSUM_OFFSET)
        );

        Ok(Self {
            buf,
            game_info,
            catalog,
            navicust_dirty: false,
        })
    }

    /// Re-encode as a full dump, recomputing derived data first.
    pub fn to_sram_dump(&mut self) -> Vec<u8> {
        self.rebuild();
        let mut dump = vec![0; DUMP_SIZE];
        let image = &mut dump[IMAGE_START..IMAGE_START + IMAGE_SIZE];
        image.copy_from_slice(&self.buf[..]);
        mask_save(image, MASK_OFFSET);
        dump
    }

    pub fn game_info(&self) -> &GameInfo {
        &self.game_info
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// The plaintext image as currently stored
    pub fn as_image(&self) -> &[u8] {
        &self.buf[..]
    }

    pub(crate) fn image(&self) -> &[u8] {
        &self.buf[..]
    }

    pub(crate) fn image_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..]
    }

    /// Checksum as currently stored
    pub fn checksum(&self) -> u32 {
        checksum::stored(self.image(), CHECKSUM_OFFSET)
    }

    /// Checksum the image should carry, recomposing the grid first if needed
    pub fn compute_checksum(&mut self) -> u32 {
        self.rebuild_navicust();
        checksum::compute(self.image(), CHECKSUM_OFFSET, self.game_info.checksum_seed())
    }

    /// Bring all derived data up to date: the navicust grid, then the checksum.
    pub fn rebuild(&mut self) {
        self.rebuild_navicust();
        let seed = self.game_info.checksum_seed();
        checksum::rebuild(self.image_mut(), CHECKSUM_OFFSET, seed);
        debug!("Rebuilt checksum: {:#010x}", self.checksum());
    }

    /// Recompose the navicust grid if a placement changed since the last time.
    pub fn rebuild_navicust(&mut self) {
        if !self.navicust_dirty {
            return;
        }
        navicust::rebuild_grid(self);
        self.navicust_dirty = false;
    }

    pub fn is_navicust_dirty(&self) -> bool {
        self.navicust_dirty
    }

    pub(crate) fn mark_navicust_dirty(&mut self) {
        self.navicust_dirty = true;
    }

    /// Up-to-date navicust grid
    pub fn navicust_grid(&mut self) -> NavicustGrid {
        self.rebuild_navicust();
        self.navicust().precomposed()
    }

    pub fn current_navi(&self) -> u8 {
        self.buf[CURRENT_NAVI_OFFSET]
    }

    pub fn set_current_navi(&mut self, navi: u8) {
        self.buf[CURRENT_NAVI_OFFSET] = navi;
    }

    pub fn chips(&self) -> ChipsView<'_> {
        ChipsView { save: self }
    }

    pub fn chips_mut(&mut self) -> ChipsViewMut<'_> {
        ChipsViewMut { save: self }
    }

    pub fn navicust(&self) -> NavicustView<'_> {
        NavicustView { save: self }
    }

    pub fn navicust_mut(&mut self) -> NavicustViewMut<'_> {
        NavicustViewMut { save: self }
    }
}
