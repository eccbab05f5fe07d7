//! # bn5save-core
//!
//! Save data access for Mega Man Battle Network 5 (Team Protoman / Team Colonel).
//!
//! This crate provides:
//! - Masking and unmasking of battery-backup dumps
//! - Checksum verification and rebuilding
//! - Chip folder, pack count and folder selection editing
//! - Navicust placement editing and grid recomposition
//!
//! Chip and part definitions are not bundled; they are loaded into a
//! [`Catalog`] and handed to [`Save`] at construction.

pub mod catalog;
pub mod checksum;
pub mod error;
pub mod folder;
pub mod game;
pub mod layout;
pub mod mask;
pub mod navicust;
pub mod save;
pub mod summary;

#[cfg(test)]
pub mod testing;

pub use catalog::{Catalog, ChipInfo, PartInfo};
pub use error::{Error, Result};
pub use folder::{CHIP_CODES, Chip, ChipsView, ChipsViewMut, RawChip};
pub use game::{GameInfo, Region, Version};
pub use navicust::{
    Footprint, NavicustGrid, NavicustView, NavicustViewMut, PlacedPart, Placement, compose,
    rotate,
};
pub use save::Save;
pub use summary::SaveSummary;
