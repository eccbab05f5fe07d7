//! Hex offset parsing.

use anyhow::Result;

/// Parse a hex offset string (with or without 0x prefix).
pub fn parse_hex_offset(s: &str) -> Result<usize> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    usize::from_str_radix(s, 16).map_err(|e| anyhow::anyhow!("Invalid hex offset: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_offset_with_prefix() {
        assert_eq!(parse_hex_offset("0x4d48").unwrap(), 0x4d48);
        assert_eq!(parse_hex_offset("0X29DC").unwrap(), 0x29dc);
    }

    #[test]
    fn test_parse_hex_offset_without_prefix() {
        assert_eq!(parse_hex_offset("1a34").unwrap(), 0x1a34);
        assert_eq!(parse_hex_offset("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_hex_offset_invalid() {
        assert!(parse_hex_offset("GHIJK").is_err());
        assert!(parse_hex_offset("0xZZZ").is_err());
        assert!(parse_hex_offset("").is_err());
    }
}
