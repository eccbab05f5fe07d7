//! Game identification
//!
//! Each save carries a 20-byte ASCII name that identifies the region and
//! version it was written by. The version selects the checksum seed.

use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, IntoStaticStr, Display,
)]
pub enum Region {
    #[strum(serialize = "US")]
    #[serde(rename = "US")]
    Us,
    #[strum(serialize = "JP")]
    #[serde(rename = "JP")]
    Jp,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, IntoStaticStr, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Version {
    #[strum(serialize = "protoman")]
    Protoman,
    #[strum(serialize = "colonel")]
    Colonel,
}

impl Version {
    /// Initial value of the additive checksum
    pub fn checksum_seed(&self) -> u32 {
        match self {
            Self::Protoman => 0x72,
            Self::Colonel => 0x18,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameInfo {
    pub region: Region,
    pub version: Version,
}

impl GameInfo {
    /// Resolve the game from the name field of a plaintext image.
    pub fn from_game_name(name: &[u8]) -> Result<Self> {
        let (region, version) = match name {
            b"REXE5TOB 20041006 US" => (Region::Us, Version::Protoman),
            b"REXE5TOK 20041006 US" => (Region::Us, Version::Colonel),
            b"REXE5TOB 20041104 JP" => (Region::Jp, Version::Protoman),
            b"REXE5TOK 20041104 JP" => (Region::Jp, Version::Colonel),
            n => return Err(Error::InvalidGameName(n.to_vec())),
        };
        Ok(Self { region, version })
    }

    /// The name field a save for this game carries
    pub fn game_name(&self) -> &'static [u8; 20] {
        match (self.region, self.version) {
            (Region::Us, Version::Protoman) => b"REXE5TOB 20041006 US",
            (Region::Us, Version::Colonel) => b"REXE5TOK 20041006 US",
            (Region::Jp, Version::Protoman) => b"REXE5TOB 20041104 JP",
            (Region::Jp, Version::Colonel) => b"REXE5TOK 20041104 JP",
        }
    }

    /// Name of the ROM this save belongs to
    pub fn rom_name(&self) -> &'static str {
        match (self.region, self.version) {
            (Region::Us, Version::Protoman) => "MEGAMAN5_TP_BRBE",
            (Region::Us, Version::Colonel) => "MEGAMAN5_TC_BRKE",
            (Region::Jp, Version::Protoman) => "ROCKEXE5_TOBBRBJ",
            (Region::Jp, Version::Colonel) => "ROCKEXE5_TOCBRKJ",
        }
    }

    pub fn checksum_seed(&self) -> u32 {
        self.version.checksum_seed()
    }
}
