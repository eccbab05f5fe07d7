//! Additive save checksum
//!
//! The checksum is the seed plus the sum of every byte in the image, skipping
//! the four bytes of the checksum field itself. Arithmetic wraps at 32 bits.

/// Size of the checksum field in bytes
const CHECKSUM_SIZE: usize = 4;

/// Sum every byte outside `[checksum_offset, checksum_offset + 4)`.
pub fn raw_checksum(buf: &[u8], checksum_offset: usize) -> u32 {
    buf.iter()
        .enumerate()
        .filter(|(i, _)| !(checksum_offset..checksum_offset + CHECKSUM_SIZE).contains(i))
        .fold(0u32, |acc, (_, &b)| acc.wrapping_add(b as u32))
}

/// Compute the checksum the image should carry for the given seed.
pub fn compute(buf: &[u8], checksum_offset: usize, seed: u32) -> u32 {
    raw_checksum(buf, checksum_offset).wrapping_add(seed)
}

/// Read the checksum currently stored in the image.
pub fn stored(buf: &[u8], checksum_offset: usize) -> u32 {
    let mut raw = [0u8; CHECKSUM_SIZE];
    raw.copy_from_slice(&buf[checksum_offset..checksum_offset + CHECKSUM_SIZE]);
    u32::from_le_bytes(raw)
}

/// Check the stored checksum against a fresh computation.
pub fn verify(buf: &[u8], checksum_offset: usize, seed: u32) -> bool {
    stored(buf, checksum_offset) == compute(buf, checksum_offset, seed)
}

/// Recompute and store the checksum.
pub fn rebuild(buf: &mut [u8], checksum_offset: usize, seed: u32) {
    let checksum = compute(buf, checksum_offset, seed);
    buf[checksum_offset..checksum_offset + CHECKSUM_SIZE].copy_from_slice(&checksum.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_image_yields_seed() {
        let buf = vec![0u8; 0x100];
        assert_eq!(compute(&buf, 0x10, 0x72), 0x72);
        assert_eq!(compute(&buf, 0x10, 0x18), 0x18);
    }

    #[test]
    fn test_checksum_field_is_excluded() {
        let mut buf = vec![1u8; 16];
        buf[4..8].copy_from_slice(&[0xff; 4]);
        assert_eq!(raw_checksum(&buf, 4), 12);
    }

    #[test]
    fn test_checksum_wraps() {
        let mut buf = vec![0u8; 16];
        buf[0] = 1;
        assert_eq!(compute(&buf, 8, u32::MAX), 0);

        rebuild(&mut buf, 8, u32::MAX);
        assert_eq!(stored(&buf, 8), 0);
        assert!(verify(&buf, 8, u32::MAX));
    }

    #[test]
    fn test_verify_detects_tampering() {
        let mut buf = vec![0u8; 64];
        rebuild(&mut buf, 32, 0x72);
        assert!(verify(&buf, 32, 0x72));
        assert!(!verify(&buf, 32, 0x18));

        buf[3] = 9;
        assert!(!verify(&buf, 32, 0x72));
    }

    proptest! {
        #[test]
        fn test_rebuild_then_verify(
            mut buf in proptest::collection::vec(any::<u8>(), 16..512),
            seed in any::<u32>(),
            edit in any::<(usize, u8)>(),
        ) {
            let offset = buf.len() / 2;
            let at = edit.0 % buf.len();
            buf[at] = edit.1;

            rebuild(&mut buf, offset, seed);
            prop_assert!(verify(&buf, offset, seed));
        }

        #[test]
        fn test_compute_ignores_stored_value(
            mut buf in proptest::collection::vec(any::<u8>(), 16..512),
            seed in any::<u32>(),
            junk in any::<u32>(),
        ) {
            let offset = buf.len() / 3;
            let before = compute(&buf, offset, seed);
            buf[offset..offset + 4].copy_from_slice(&junk.to_le_bytes());
            prop_assert_eq!(compute(&buf, offset, seed), before);
        }
    }
}
