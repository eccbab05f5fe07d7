//! Memory layout constants for the save image
//!
//! This module centralizes every fixed offset used to read and write save data.
//! Offsets are relative to the start of the plaintext image unless noted.

/// SRAM dump framing
pub mod sram {
    /// Total size of a battery-backup dump
    pub const DUMP_SIZE: usize = 0x10000;
    /// Where the save image starts inside the dump
    pub const IMAGE_START: usize = 0x0100;
    /// Size of the save image (31,764 bytes)
    pub const IMAGE_SIZE: usize = 0x7c14;
}

/// Header fields: mask key, checksum and game name
pub mod header {
    pub const MASK_OFFSET: usize = 0x1a34;
    pub const CHECKSUM_OFFSET: usize = 0x29dc;
    pub const GAME_NAME_OFFSET: usize = 0x29e0;
    pub const GAME_NAME_SIZE: usize = 20;
    pub const CURRENT_NAVI_OFFSET: usize = 0x2941;
}

/// Chip folders, pack counts and folder selection
pub mod folder {
    pub const FOLDER_COUNT: usize = 3;
    pub const CHIPS_PER_FOLDER: usize = 30;
    /// Each folder entry is a little-endian u16
    pub const CHIP_SIZE: usize = 2;
    pub const FOLDERS_OFFSET: usize = 0x2df4;

    pub const PACK_OFFSET: usize = 0x2eac;
    /// Bytes reserved per chip id in the pack table
    pub const PACK_STRIDE: usize = 0x0c;

    pub const EQUIPPED_FOLDER_OFFSET: usize = 0x52d5;
    pub const REGULAR_CHIP_OFFSET: usize = 0x52d6;
    /// Marks "no regular chip" in the regular chip table
    pub const NO_REGULAR_CHIP: u8 = 0xff;
}

/// Navicust placements and the derived grid
pub mod navicust {
    pub const WIDTH: usize = 5;
    pub const HEIGHT: usize = 5;
    /// Row of the grid crossed by the command line
    pub const COMMAND_LINE_ROW: usize = 2;

    pub const GRID_OFFSET: usize = 0x4d48;
    pub const GRID_SIZE: usize = WIDTH * HEIGHT;

    pub const PLACEMENTS_OFFSET: usize = 0x4d6c;
    pub const PLACEMENT_COUNT: usize = 30;
    pub const PLACEMENT_STRIDE: usize = 8;

    // Field offsets within a placement record
    pub const ID_VARIANT: usize = 0;
    pub const COL: usize = 3;
    pub const ROW: usize = 4;
    pub const ROT: usize = 5;
    pub const COMPRESSED: usize = 6;
}
