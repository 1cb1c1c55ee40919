//! Order-preserving packing of up to 16 bytes into a `u128`.
//!
//! Byte `i` of the zero-padded buffer lands at bit offset `120 - 8 * i`: the
//! buffer is read as a big-endian integer. Comparing two packed values
//! therefore compares the bytes left to right, and padding with zeros on the
//! right makes a proper prefix sort before every extension of it.

/// Bytes that fit in a packed value.
pub const PACKED_LEN: usize = 16;

/// Packs the first [`PACKED_LEN`] bytes of `bytes`, zero padded.
#[inline]
pub fn pack_prefix(bytes: &[u8]) -> u128 {
    let mut buf = [0_u8; PACKED_LEN];
    let n = bytes.len().min(PACKED_LEN);
    buf[..n].copy_from_slice(&bytes[..n]);
    u128::from_be_bytes(buf)
}

/// Packs `bytes` if they can be recovered from the packed value alone.
///
/// That needs a non-empty input of at most [`PACKED_LEN`] bytes whose last
/// byte is non-zero, since trailing zeros are indistinguishable from padding.
#[inline]
pub fn pack_exact(bytes: &[u8]) -> Option<u128> {
    match bytes.last() {
        Some(&last) if last != 0 && bytes.len() <= PACKED_LEN => Some(pack_prefix(bytes)),
        _ => None,
    }
}

/// Number of significant bytes in a packed value.
#[inline]
pub const fn packed_len(packed: u128) -> usize {
    PACKED_LEN - (packed.trailing_zeros() as usize / 8)
}

/// Returns the padded buffer and the number of significant bytes in it.
#[inline]
pub fn unpack(packed: u128) -> ([u8; PACKED_LEN], usize) {
    (packed.to_be_bytes(), packed_len(packed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_fill_from_the_most_significant_end() {
        assert_eq!(pack_prefix(b"a"), 0x61 << 120);
        assert_eq!(pack_prefix(b"ab"), (0x61 << 120) | (0x62 << 112));
        assert_eq!(pack_prefix(b"0123456789abcdefXYZ"), pack_prefix(b"0123456789abcdef"));
    }

    #[test]
    fn unpack_recovers_length() {
        for s in ["a", "short1", "hello", "0123456789abcdef", "a\0b"] {
            let packed = pack_exact(s.as_bytes()).unwrap();
            let (buf, len) = unpack(packed);
            assert_eq!(&buf[..len], s.as_bytes());
            assert_eq!(packed_len(packed), s.len());
        }
        assert_eq!(packed_len(0), 0);
    }

    #[test]
    fn refuses_ambiguous_inputs() {
        assert_eq!(pack_exact(b""), None);
        assert_eq!(pack_exact(b"ab\0"), None);
        assert_eq!(pack_exact(b"0123456789abcdefg"), None);
    }

    #[test]
    fn prefixes_sort_first() {
        let ordered = ["[", "[a", "[aa", "[aaaaaaaa", "[aaaaaaaaaaaaaaa", "[aaaaaaaaaaaaaab", "]"];
        for pair in ordered.windows(2) {
            assert!(pack_prefix(pair[0].as_bytes()) < pack_prefix(pair[1].as_bytes()));
        }
    }
}
