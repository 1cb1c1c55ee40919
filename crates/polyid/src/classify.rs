use crate::codec::{
    HexCase, decode_envelope, decode_sortable, pack_exact, parse_canonical, parse_hyphenated,
};
use crate::{Id, IdKind};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Builds the most compact [`Id`] that prints `s` back exactly.
///
/// Recognizers are tried in a fixed order and the first match wins:
///
/// 1. `""` is [`IdKind::None`].
/// 2. `"null"` is [`IdKind::Null`].
/// 3. A hyphenated UUID whose letters are all lowercase is [`IdKind::Uuid`],
///    all uppercase [`IdKind::UuidCaps`]. Mixed case is not a UUID.
/// 4. Digits without a leading zero that fit in 128 bits are
///    [`IdKind::BigDec`].
/// 5. A 26-symbol base64url token opening with the 128-bit envelope header is
///    [`IdKind::Goog128`].
/// 6. Sixteen symbols of the sortable alphabet (`+/0-9A-Za-z`) are
///    [`IdKind::Base64_96`].
/// 7. Up to 16 bytes not ending in a NUL byte are [`IdKind::ShortStr`].
/// 8. Everything else is kept verbatim as [`IdKind::Str`].
///
/// Never fails.
///
/// ```
/// use polyid::{IdKind, classify};
///
/// assert_eq!(classify("7394206091425759590").kind(), IdKind::BigDec);
/// assert_eq!(classify("01394206091425759590").kind(), IdKind::Str);
/// assert_eq!(classify("CAESEAYra3NIxLT9C8twKrzqaA").kind(), IdKind::Goog128);
/// assert_eq!(classify("hello").kind(), IdKind::ShortStr);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn classify(s: &str) -> Id {
    if s.is_empty() {
        return Id::default();
    }
    if s == "null" {
        return Id::null();
    }
    if let Some((uuid, case)) = parse_hyphenated(s) {
        let kind = match case {
            HexCase::Lower => IdKind::Uuid,
            HexCase::Upper => IdKind::UuidCaps,
        };
        return Id::uuid(uuid, kind);
    }
    if let Some(value) = parse_canonical(s) {
        return Id::big_dec(value);
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        trace_rejected(s, "leading zero or wider than 128 bits");
    }

    let bytes = s.as_bytes();
    if let Some(payload) = decode_envelope(bytes) {
        return Id::packed(IdKind::Goog128, payload);
    }
    if let Some(value) = decode_sortable(bytes) {
        return Id::packed(IdKind::Base64_96, value);
    }
    if let Some(packed) = pack_exact(bytes) {
        return Id::packed(IdKind::ShortStr, packed);
    }
    Id::text(s.into())
}

#[inline]
fn trace_rejected(_s: &str, _reason: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(input = _s, reason = _reason, "digits kept as text");
}
