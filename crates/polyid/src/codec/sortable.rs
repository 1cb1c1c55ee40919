//! Sortable base64 for 96-bit values.
//!
//! The alphabet is the usual 64 symbols rearranged into ASCII order, so the
//! byte order of two encoded tokens always agrees with the numeric order of
//! the values they carry.

const ALPHABET: &[u8; 64] = b"+/0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: usize = 6;

/// Number of symbols in an encoded token.
pub const SORTABLE_LEN: usize = 16;

/// Largest value representable in [`SORTABLE_LEN`] symbols.
pub const SORTABLE_MAX: u128 = (1 << (SORTABLE_LEN * BITS_PER_CHAR)) - 1;

/// Lookup table for sortable base64 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 64 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Encodes the low 96 bits of `value`, most significant symbol first.
#[inline]
pub fn encode_sortable(value: u128, buf: &mut [u8; SORTABLE_LEN]) {
    let mask = 0x3F;
    for (i, out) in buf.iter_mut().enumerate() {
        let shift = (SORTABLE_LEN - 1 - i) * BITS_PER_CHAR;
        *out = ALPHABET[((value >> shift) & mask) as usize];
    }
}

/// Decodes a token of exactly [`SORTABLE_LEN`] symbols.
///
/// Returns `None` on a wrong length or a byte outside the alphabet.
#[inline]
pub fn decode_sortable(encoded: &[u8]) -> Option<u128> {
    if encoded.len() != SORTABLE_LEN {
        return None;
    }
    let mut acc = 0_u128;
    for &b in encoded {
        let val = LOOKUP[b as usize];
        if val == NO_VALUE {
            return None;
        }
        acc = (acc << BITS_PER_CHAR) | u128::from(val);
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: u128) -> String {
        let mut buf = [0_u8; SORTABLE_LEN];
        encode_sortable(value, &mut buf);
        String::from_utf8(buf.to_vec()).unwrap()
    }

    #[test]
    fn alphabet_is_in_ascii_order() {
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn known_positions() {
        assert_eq!(decode_sortable(b"++++++++++++++++"), Some(0));
        assert_eq!(decode_sortable(b"+++++++++++++++/"), Some(1));
        assert_eq!(decode_sortable(b"+++++++++++++++0"), Some(2));
        assert_eq!(decode_sortable(b"++++/+++++++++++"), Some(1 << 66));
        assert_eq!(decode_sortable(b"zzzzzzzzzzzzzzzz"), Some(SORTABLE_MAX));
    }

    #[test]
    fn encode_inverts_decode() {
        for token in ["++++VpWW999gvYaw", "jDhUJMWW9997leCw", "+++cK+yK999sjMHw"] {
            let value = decode_sortable(token.as_bytes()).unwrap();
            assert_eq!(encode(value), token);
        }
        assert_eq!(encode(SORTABLE_MAX), "zzzzzzzzzzzzzzzz");
    }

    #[test]
    fn rejects_foreign_bytes_and_lengths() {
        assert_eq!(decode_sortable(b"++++++++++++++-+"), None);
        assert_eq!(decode_sortable(b"+++++++++++++++="), None);
        assert_eq!(decode_sortable(b"+++++++++++++++"), None);
        assert_eq!(decode_sortable(b"+++++++++++++++++"), None);
    }

    #[test]
    fn numeric_order_matches_text_order() {
        let values = [0, 1, 63, 64, 1 << 40, (1 << 64) + 5, SORTABLE_MAX - 1, SORTABLE_MAX];
        for pair in values.windows(2) {
            assert!(encode(pair[0]) < encode(pair[1]));
        }
    }
}
