//! Static chip and navicust part data
//!
//! The catalog is loaded from two JSON arrays indexed by id, where `null`
//! marks an unused id:
//!
//! ```json
//! [null, {"name": "Cannon", "codes": "ABC*"}]
//! [null, {"name": "SuperArmr", "color": "white", "squares": [0, 0, 1, ...]}]
//! ```
//!
//! Everything is validated once at load time so lookups never have to deal
//! with malformed records.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::folder::{CHIP_CODES, MAX_CHIP_ID};
use crate::navicust::{Footprint, MAX_PART_ID};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipInfo {
    pub name: String,
    /// Code letters this chip can appear with
    #[serde(default)]
    pub codes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPartInfo")]
pub struct PartInfo {
    pub name: String,
    pub color: Option<String>,
    /// Unrotated shape: 0 = empty, 1 = core square, 2+ = extension square
    pub squares: Footprint,
}

#[derive(Deserialize)]
struct RawPartInfo {
    name: String,
    #[serde(default)]
    color: Option<String>,
    squares: Vec<u8>,
}

impl TryFrom<RawPartInfo> for PartInfo {
    type Error = String;

    fn try_from(raw: RawPartInfo) -> std::result::Result<Self, Self::Error> {
        if raw.squares.len() != 25 {
            return Err(format!(
                "part {:?} has {} squares, expected 25",
                raw.name,
                raw.squares.len()
            ));
        }
        let mut squares = [[0u8; 5]; 5];
        for (i, v) in raw.squares.into_iter().enumerate() {
            squares[i / 5][i % 5] = v;
        }
        Ok(Self {
            name: raw.name,
            color: raw.color,
            squares,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    chips: Vec<Option<ChipInfo>>,
    parts: Vec<Option<PartInfo>>,
}

impl Catalog {
    /// Build a catalog, rejecting tables that do not fit the save's id fields.
    pub fn new(chips: Vec<Option<ChipInfo>>, parts: Vec<Option<PartInfo>>) -> Result<Self> {
        if chips.len() > MAX_CHIP_ID as usize + 1 {
            return Err(Error::InvalidCatalog(format!(
                "{} chips exceed the 9-bit id space",
                chips.len()
            )));
        }
        if parts.len() > MAX_PART_ID as usize + 1 {
            return Err(Error::InvalidCatalog(format!(
                "{} parts exceed the 6-bit id space",
                parts.len()
            )));
        }
        if parts.first().is_some_and(Option::is_some) {
            return Err(Error::InvalidCatalog(
                "part id 0 is reserved for empty slots".to_string(),
            ));
        }
        for chip in chips.iter().flatten() {
            if let Some(c) = chip.codes.chars().find(|c| !CHIP_CODES.contains(*c)) {
                return Err(Error::InvalidCatalog(format!(
                    "chip {:?} lists unknown code {:?}",
                    chip.name, c
                )));
            }
        }
        Ok(Self { chips, parts })
    }

    pub fn from_json(chips_json: &str, parts_json: &str) -> Result<Self> {
        let chips = serde_json::from_str(chips_json)?;
        let parts = serde_json::from_str(parts_json)?;
        Self::new(chips, parts)
    }

    /// Load both tables from disk
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(chips_path: P, parts_path: Q) -> Result<Self> {
        let chips_json = fs::read_to_string(chips_path.as_ref())?;
        let parts_json = fs::read_to_string(parts_path.as_ref())?;
        let catalog = Self::from_json(&chips_json, &parts_json)?;
        info!(
            "Loaded catalog: {} chips from {}, {} parts from {}",
            catalog.chip_count(),
            chips_path.as_ref().display(),
            catalog.part_count(),
            parts_path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn chip(&self, id: u16) -> Option<&ChipInfo> {
        self.chips.get(id as usize)?.as_ref()
    }

    pub fn part(&self, id: u8) -> Option<&PartInfo> {
        self.parts.get(id as usize)?.as_ref()
    }

    /// Number of defined chips
    pub fn chip_count(&self) -> usize {
        self.chips.iter().flatten().count()
    }

    /// Number of defined parts
    pub fn part_count(&self) -> usize {
        self.parts.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CHIPS: &str = r#"[null, {"name": "Cannon", "codes": "ABC*"}, {"name": "Sword"}]"#;
    const PARTS: &str = r#"[
        null,
        {"name": "SuperArmr", "color": "white",
         "squares": [0,0,0,0,0, 0,0,1,0,0, 0,0,1,2,0, 0,0,0,0,0, 0,0,0,0,0]}
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CHIPS, PARTS).unwrap();
        assert_eq!(catalog.chip_count(), 2);
        assert_eq!(catalog.part_count(), 1);
        assert_eq!(catalog.chip(1).unwrap().name, "Cannon");
        assert_eq!(catalog.chip(2).unwrap().codes, "");
        assert!(catalog.chip(0).is_none());
        assert!(catalog.chip(400).is_none());

        let part = catalog.part(1).unwrap();
        assert_eq!(part.color.as_deref(), Some("white"));
        assert_eq!(part.squares[1][2], 1);
        assert_eq!(part.squares[2][3], 2);
    }

    #[test]
    fn test_rejects_short_footprint() {
        let parts = r#"[null, {"name": "Bad", "squares": [1, 1, 1]}]"#;
        assert!(matches!(
            Catalog::from_json(CHIPS, parts),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_rejects_part_zero() {
        let parts = r#"[{"name": "Zero", "squares": [0,0,0,0,0, 0,0,0,0,0, 0,0,1,0,0, 0,0,0,0,0, 0,0,0,0,0]}]"#;
        assert!(matches!(
            Catalog::from_json(CHIPS, parts),
            Err(Error::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_code() {
        let chips = r#"[null, {"name": "Cannon", "codes": "A?"}]"#;
        assert!(matches!(
            Catalog::from_json(chips, PARTS),
            Err(Error::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_tables() {
        let parts = vec![None; 65];
        assert!(Catalog::new(Vec::new(), parts).is_err());
        let chips = vec![None; 513];
        assert!(Catalog::new(chips, Vec::new()).is_err());
    }

    #[test]
    fn test_load_from_files() {
        let mut chips = NamedTempFile::new().unwrap();
        chips.write_all(CHIPS.as_bytes()).unwrap();
        let mut parts = NamedTempFile::new().unwrap();
        parts.write_all(PARTS.as_bytes()).unwrap();

        let catalog = Catalog::load(chips.path(), parts.path()).unwrap();
        assert_eq!(catalog.part(1).unwrap().name, "SuperArmr");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("does-not-exist.json", "nope.json").unwrap_err();
        assert!(err.is_not_found());
    }
}
