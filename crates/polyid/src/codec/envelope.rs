//! Google-style 128-bit tokens.
//!
//! The envelope is a four byte protobuf header (`field 1 = 1`, `field 2 =
//! 16 bytes`) followed by the 16 payload bytes. A token is the first 156 bits
//! of that envelope written as 26 unpadded base64url symbols, which is why
//! every token starts with `CAESE`. The last four payload bits do not make it
//! into the token and are always zero.

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: usize = 6;

/// Envelope header preceding the payload.
pub const ENVELOPE_HEADER: [u8; 4] = [0x08, 0x01, 0x12, 0x10];

/// Number of symbols in a token.
pub const TOKEN_LEN: usize = 26;

const ENVELOPE_LEN: usize = ENVELOPE_HEADER.len() + 16;

/// Payload bits that never reach the token.
#[cfg(test)]
const DROPPED_MASK: u128 = 0xF;

/// Lookup table for base64url decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 64 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Writes the token for `payload`, whose low four bits are ignored.
pub fn encode_envelope(payload: u128, buf: &mut [u8; TOKEN_LEN]) {
    let mut envelope = [0_u8; ENVELOPE_LEN];
    envelope[..ENVELOPE_HEADER.len()].copy_from_slice(&ENVELOPE_HEADER);
    envelope[ENVELOPE_HEADER.len()..].copy_from_slice(&payload.to_be_bytes());

    let mut bits = 0_usize;
    let mut acc = 0_u16;
    let mut out = 0;
    for &b in &envelope {
        acc = (acc << 8) | u16::from(b);
        bits += 8;
        while bits >= BITS_PER_CHAR && out < TOKEN_LEN {
            bits -= BITS_PER_CHAR;
            buf[out] = ALPHABET[((acc >> bits) & 0x3F) as usize];
            out += 1;
        }
    }
}

/// Decodes a token back into its payload.
///
/// Returns `None` unless the input is exactly [`TOKEN_LEN`] base64url symbols
/// whose leading bits spell [`ENVELOPE_HEADER`].
pub fn decode_envelope(encoded: &[u8]) -> Option<u128> {
    if encoded.len() != TOKEN_LEN {
        return None;
    }

    let mut envelope = [0_u8; ENVELOPE_LEN];
    let mut bits = 0_usize;
    let mut acc = 0_u16;
    let mut out = 0;
    for &b in encoded {
        let val = LOOKUP[b as usize];
        if val == NO_VALUE {
            return None;
        }
        acc = (acc << BITS_PER_CHAR) | u16::from(val);
        bits += BITS_PER_CHAR;
        if bits >= 8 {
            bits -= 8;
            envelope[out] = (acc >> bits) as u8;
            out += 1;
        }
    }
    // 156 bits fill 19 bytes; the remaining nibble opens the last one.
    envelope[out] = (acc << (8 - bits)) as u8;

    if envelope[..ENVELOPE_HEADER.len()] != ENVELOPE_HEADER {
        return None;
    }
    let mut payload = [0_u8; 16];
    payload.copy_from_slice(&envelope[ENVELOPE_HEADER.len()..]);
    Some(u128::from_be_bytes(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "CAESEAYra3NIxLT9C8twKrzqaA";

    fn encode(payload: u128) -> String {
        let mut buf = [0_u8; TOKEN_LEN];
        encode_envelope(payload, &mut buf);
        String::from_utf8(buf.to_vec()).unwrap()
    }

    #[test]
    fn decodes_observed_token() {
        let payload = decode_envelope(TOKEN.as_bytes()).unwrap();
        assert_eq!(payload >> 8, 0x062b_6b73_48c4_b4fd_0bcb_702a_bcea_68);
        assert_eq!(payload & DROPPED_MASK, 0);
        assert_eq!(encode(payload), TOKEN);
    }

    #[test]
    fn every_token_starts_with_the_header_prefix() {
        assert!(encode(0).starts_with("CAESE"));
        assert!(encode(u128::MAX).starts_with("CAESE"));
        assert_eq!(decode_envelope(encode(u128::MAX).as_bytes()), Some(!DROPPED_MASK));
    }

    #[test]
    fn rejects_other_headers() {
        // Same length and alphabet, header field 2 is 17 bytes long.
        assert_eq!(decode_envelope(b"CAESEQYra3NIxLT9C8twKrzqaA"), None);
        assert_eq!(decode_envelope(b"DAESEAYra3NIxLT9C8twKrzqaA"), None);
    }

    #[test]
    fn rejects_padding_and_wrong_lengths() {
        assert_eq!(decode_envelope(b"CAESEAYra3NIxLT9C8twKrzqa="), None);
        assert_eq!(decode_envelope(b"CAESEAYra3NIxLT9C8twKrzqa"), None);
        assert_eq!(decode_envelope(b"CAESEAYra3NIxLT9C8twKrzqaAA"), None);
    }
}
