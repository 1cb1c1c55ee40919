/// Parses a canonical unsigned decimal of at most 128 bits.
///
/// Only ASCII digits are accepted and a leading zero is only allowed for the
/// string `"0"` itself. Anything that could not be printed back verbatim from
/// the integer (`"007"`, `"+7"`, 40 digits) yields `None`.
pub fn parse_canonical(s: &str) -> Option<u128> {
    let bytes = s.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if !bytes.iter().all(u8::is_ascii_digit) => None,
        _ => s.parse().ok(),
    }
}

/// Number of digits in the canonical decimal form of `value`.
#[inline]
pub const fn decimal_len(value: u128) -> usize {
    match value.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}
