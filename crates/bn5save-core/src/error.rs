use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid save size: expected {expected} bytes, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    #[error("Unknown game name: {:?}", String::from_utf8_lossy(.0))]
    InvalidGameName(Vec<u8>),

    #[error("Checksum mismatch: stored {actual:#010x}, computed {expected:#010x}")]
    ChecksumMismatch { actual: u32, expected: u32 },

    #[error("Navicust part {0} is not in the catalog")]
    UnknownPart(u8),

    #[error("Navicust part id {0} does not fit the 6-bit id field")]
    InvalidPart(u8),

    #[error("Navicust part variant {0} is out of range (0-3)")]
    InvalidPartVariant(u8),

    #[error("Rotation {0} is out of range (0-3)")]
    InvalidRotation(u8),

    #[error("Chip id {0:#x} does not fit the 9-bit id field")]
    InvalidChipId(u16),

    #[error("Invalid chip code: {0:?}")]
    InvalidChipCode(char),

    #[error("Chip variant {0} has no code letter")]
    InvalidChipVariant(u8),

    #[error("{what} index {index} is out of range (0-{})", .len.saturating_sub(1))]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error rejects a whole dump rather than a single field edit
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidSize { .. } | Error::InvalidGameName(_) | Error::ChecksumMismatch { .. }
        )
    }

    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Bounds-check an index against a fixed table length.
pub(crate) fn check_index(what: &'static str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(Error::IndexOutOfRange { what, index, len });
    }
    Ok(())
}
