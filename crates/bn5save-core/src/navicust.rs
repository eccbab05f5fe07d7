//! Navicust placements and the composed occupancy grid
//!
//! The save stores up to 30 part placements in a fixed table. The 5×5 grid the
//! game reads (and the checksum covers) is derived from those placements and
//! has to be recomposed whenever a placement changes.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result, check_index};
use crate::layout::navicust::{
    COL, COMMAND_LINE_ROW, COMPRESSED, GRID_OFFSET, GRID_SIZE, HEIGHT, ID_VARIANT,
    PLACEMENT_COUNT, PLACEMENT_STRIDE, PLACEMENTS_OFFSET, ROT, ROW, WIDTH,
};
use crate::save::Save;

/// Largest part id the 6-bit id field can hold
pub const MAX_PART_ID: u8 = 0x3f;

/// Unrotated 5×5 part shape centred on `[2][2]`
pub type Footprint = [[u8; 5]; 5];

/// Footprint value of a core square; anything larger is an extension square
const CORE_SQUARE: u8 = 1;

/// Offset from a footprint index to the anchor it is centred on
const FOOTPRINT_CENTER: isize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub id: u8,
    /// Colour variant (0-3)
    pub variant: u8,
    pub col: u8,
    pub row: u8,
    /// Quarter turns clockwise
    pub rot: u8,
    pub compressed: bool,
}

impl Placement {
    /// Parse a placement record, returning None for an empty slot.
    pub fn from_bytes(raw: &[u8]) -> Option<Self> {
        let packed = raw[ID_VARIANT];
        let id = packed >> 2;
        if id == 0 {
            return None;
        }
        Some(Self {
            id,
            variant: packed & 0x3,
            col: raw[COL],
            row: raw[ROW],
            rot: raw[ROT],
            compressed: raw[COMPRESSED] != 0,
        })
    }

    /// Write the record fields, leaving the record's unused bytes untouched.
    fn write_to(&self, raw: &mut [u8]) {
        raw[ID_VARIANT] = (self.id << 2) | self.variant;
        raw[COL] = self.col;
        raw[ROW] = self.row;
        raw[ROT] = self.rot;
        raw[COMPRESSED] = self.compressed as u8;
    }

    /// Check the fields that have to fit their packed representation.
    ///
    /// Column and row are not checked: out-of-board anchors are clipped when
    /// the grid is composed.
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 || self.id > MAX_PART_ID {
            return Err(Error::InvalidPart(self.id));
        }
        if self.variant > 3 {
            return Err(Error::InvalidPartVariant(self.variant));
        }
        if self.rot > 3 {
            return Err(Error::InvalidRotation(self.rot));
        }
        Ok(())
    }
}

/// Rotate a footprint 90° clockwise about its centre.
pub fn rotate_cw(footprint: &Footprint) -> Footprint {
    let mut out = [[0u8; 5]; 5];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = footprint[4 - j][i];
        }
    }
    out
}

/// Rotate a footprint `rot` quarter turns clockwise.
pub fn rotate(footprint: &Footprint, rot: u8) -> Footprint {
    (0..rot % 4).fold(*footprint, |f, _| rotate_cw(&f))
}

/// Composed grid: each cell holds the occupying slot index plus one, or 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavicustGrid([u8; GRID_SIZE]);

impl NavicustGrid {
    pub fn from_bytes(raw: &[u8]) -> Self {
        let mut cells = [0u8; GRID_SIZE];
        cells.copy_from_slice(&raw[..GRID_SIZE]);
        Self(cells)
    }

    pub fn as_bytes(&self) -> &[u8; GRID_SIZE] {
        &self.0
    }

    /// Slot index occupying a cell
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= HEIGHT || col >= WIDTH {
            return None;
        }
        self.0[row * WIDTH + col].checked_sub(1).map(usize::from)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.0.chunks(WIDTH)
    }

    fn set(&mut self, row: usize, col: usize, slot: usize) {
        self.0[row * WIDTH + col] = (slot + 1) as u8;
    }
}

/// A placement paired with its catalog footprint
#[derive(Debug, Clone, Copy)]
pub struct PlacedPart<'a> {
    pub slot: usize,
    pub placement: Placement,
    pub footprint: &'a Footprint,
}

/// Compose the occupancy grid from placed parts.
///
/// Parts are laid down in ascending slot order whatever order they arrive in,
/// so higher slots overwrite lower ones where footprints overlap. Parts whose
/// slot is outside the placement table are ignored. Squares that land outside
/// the board are dropped. Compressed parts only contribute their core squares.
pub fn compose<'a>(parts: impl IntoIterator<Item = PlacedPart<'a>>) -> NavicustGrid {
    let mut parts: Vec<_> = parts
        .into_iter()
        .filter(|part| part.slot < PLACEMENT_COUNT)
        .collect();
    parts.sort_by_key(|part| part.slot);

    let mut grid = NavicustGrid::default();
    for part in parts {
        let p = part.placement;
        let squares = rotate(part.footprint, p.rot);

        for (i, row) in squares.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                if v == 0 || (p.compressed && v != CORE_SQUARE) {
                    continue;
                }

                let r = i as isize + p.row as isize - FOOTPRINT_CENTER;
                let c = j as isize + p.col as isize - FOOTPRINT_CENTER;
                if !(0..HEIGHT as isize).contains(&r) || !(0..WIDTH as isize).contains(&c) {
                    continue;
                }
                grid.set(r as usize, c as usize, part.slot);
            }
        }
    }

    grid
}

fn placement_range(slot: usize) -> std::ops::Range<usize> {
    let start = PLACEMENTS_OFFSET + slot * PLACEMENT_STRIDE;
    start..start + PLACEMENT_STRIDE
}

pub(crate) fn read_placement(image: &[u8], slot: usize) -> Option<Placement> {
    Placement::from_bytes(&image[placement_range(slot)])
}

/// Recompose the stored grid from the placement table.
///
/// Every occupied placement is known to the catalog: loads reject unknown
/// parts and writes go through [`NavicustViewMut::set_placement`].
pub(crate) fn rebuild_grid(save: &mut Save) {
    let catalog = save.catalog_handle();
    let grid = compose((0..PLACEMENT_COUNT).filter_map(|slot| {
        let placement = read_placement(save.image(), slot)?;
        let info = catalog.part(placement.id)?;
        Some(PlacedPart {
            slot,
            placement,
            footprint: &info.squares,
        })
    }));

    save.image_mut()[GRID_OFFSET..GRID_OFFSET + GRID_SIZE].copy_from_slice(grid.as_bytes());
    debug!("Recomposed navicust grid");
}

pub struct NavicustView<'a> {
    pub(crate) save: &'a Save,
}

impl<'a> NavicustView<'a> {
    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    pub fn command_line(&self) -> usize {
        COMMAND_LINE_ROW
    }

    pub fn has_out_of_bounds(&self) -> bool {
        false
    }

    pub fn count(&self) -> usize {
        PLACEMENT_COUNT
    }

    pub fn placement(&self, slot: usize) -> Result<Option<Placement>> {
        check_index("Navicust slot", slot, PLACEMENT_COUNT)?;
        Ok(read_placement(self.save.image(), slot))
    }

    /// Occupied slots in ascending order
    pub fn placements(&self) -> impl Iterator<Item = (usize, Placement)> + use<'a> {
        let save: &'a Save = self.save;
        let image = save.image();
        (0..PLACEMENT_COUNT).filter_map(move |slot| Some((slot, read_placement(image, slot)?)))
    }

    /// The grid as currently stored, which is stale while [`Self::is_dirty`].
    pub fn precomposed(&self) -> NavicustGrid {
        NavicustGrid::from_bytes(&self.save.image()[GRID_OFFSET..])
    }

    pub fn is_dirty(&self) -> bool {
        self.save.is_navicust_dirty()
    }
}

pub struct NavicustViewMut<'a> {
    pub(crate) save: &'a mut Save,
}

impl NavicustViewMut<'_> {
    /// Write a placement and invalidate the composed grid.
    pub fn set_placement(&mut self, slot: usize, placement: Placement) -> Result<()> {
        check_index("Navicust slot", slot, PLACEMENT_COUNT)?;
        placement.validate()?;
        if self.save.catalog().part(placement.id).is_none() {
            return Err(Error::UnknownPart(placement.id));
        }

        placement.write_to(&mut self.save.image_mut()[placement_range(slot)]);
        self.save.mark_navicust_dirty();
        Ok(())
    }

    /// Empty a slot and invalidate the composed grid.
    pub fn clear_placement(&mut self, slot: usize) -> Result<()> {
        check_index("Navicust slot", slot, PLACEMENT_COUNT)?;
        self.save.image_mut()[placement_range(slot)].fill(0);
        self.save.mark_navicust_dirty();
        Ok(())
    }
}
