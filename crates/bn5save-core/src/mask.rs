//! Save image obfuscation
//!
//! The image is XOR-masked with the low byte of a 32-bit key stored inside the
//! image itself. The key field is written back in plaintext after the pass, so
//! masking and unmasking are the same operation.

/// Read the little-endian mask key stored at `mask_offset`.
pub fn mask_key(buf: &[u8], mask_offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[mask_offset],
        buf[mask_offset + 1],
        buf[mask_offset + 2],
        buf[mask_offset + 3],
    ])
}

/// Apply (or remove) the mask in place.
///
/// `buf` must be at least `mask_offset + 4` bytes long.
pub fn mask_save(buf: &mut [u8], mask_offset: usize) {
    let key = mask_key(buf, mask_offset);
    let k = key as u8;
    for b in buf.iter_mut() {
        *b ^= k;
    }
    buf[mask_offset..mask_offset + 4].copy_from_slice(&key.to_le_bytes());
}
