//! Hexdump command implementation.
//!
//! Displays unmasked save bytes in traditional hexdump format, useful for
//! investigating fields that have no dedicated accessor yet.
//!
//! # Output Format
//!
//! ```text
//! 0x29E0: 52 45 58 45 35 54 4F 42  20 32 30 30 34 31 30 30  |REXE5TOB 2004100|
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};
use bn5save_core::Catalog;

use super::hex_utils::parse_hex_offset;
use super::load_save;

/// Run the hexdump command
pub fn run(path: &Path, catalog: Arc<Catalog>, offset: &str, size: usize, ascii: bool) -> Result<()> {
    let start = parse_hex_offset(offset)?;
    let save = load_save(path, catalog)?;
    let image = save.as_image();

    if start >= image.len() {
        bail!(
            "Offset 0x{:X} is past the end of the image (0x{:X} bytes)",
            start,
            image.len()
        );
    }
    let bytes = &image[start..start.saturating_add(size).min(image.len())];

    println!("Hexdump at 0x{:X} ({} bytes):", start, bytes.len());
    println!();
    print!("{}", format_hexdump(start, bytes, ascii));

    Ok(())
}

/// Format bytes as hexdump lines labelled with their image offset
pub fn format_hexdump(start: usize, bytes: &[u8], ascii: bool) -> String {
    let mut out = String::new();

    for (i, chunk) in bytes.chunks(16).enumerate() {
        out.push_str(&format!("0x{:04X}: ", start + i * 16));

        for (j, byte) in chunk.iter().enumerate() {
            if j == 8 {
                out.push(' ');
            }
            out.push_str(&format!("{:02X} ", byte));
        }

        // Padding for incomplete lines
        for j in chunk.len()..16 {
            if j == 8 {
                out.push(' ');
            }
            out.push_str("   ");
        }

        if ascii {
            out.push_str(" |");
            for &byte in chunk {
                out.push(if (0x20..0x7f).contains(&byte) {
                    byte as char
                } else {
                    '.'
                });
            }
            for _ in chunk.len()..16 {
                out.push(' ');
            }
            out.push('|');
        }

        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_line() {
        let bytes: Vec<u8> = (0x41..0x51).collect();
        let out = format_hexdump(0x10, &bytes, true);
        assert_eq!(
            out,
            "0x0010: 41 42 43 44 45 46 47 48  49 4A 4B 4C 4D 4E 4F 50  |ABCDEFGHIJKLMNOP|\n"
        );
    }

    #[test]
    fn test_format_partial_line_is_padded() {
        let out = format_hexdump(0, &[0x00, 0x7f], true);
        let line = out.lines().next().unwrap();
        assert!(line.starts_with("0x0000: 00 7F "));
        assert!(line.ends_with("|..              |"));
        assert_eq!(line.len(), "0x0000: ".len() + 16 * 3 + 1 + 2 + 16 + 1);
    }

    #[test]
    fn test_format_without_ascii() {
        let out = format_hexdump(0, &[0xab; 20], false);
        assert_eq!(out.lines().count(), 2);
        assert!(!out.contains('|'));
    }
}
