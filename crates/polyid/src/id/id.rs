use crate::codec::{
    HYPHENATED_LEN, SORTABLE_LEN, SORTABLE_MAX, TOKEN_LEN, decimal_len, encode_envelope,
    encode_sortable, pack_prefix, packed_len, unpack,
};
use crate::{Error, IdKind, classify};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// A packed, totally ordered identifier.
///
/// The payload is a 128-bit value split over two words, [`Id::hi`] (more
/// significant) and [`Id::lo`], interpreted according to [`Id::kind`]. Only
/// [`IdKind::Str`] keeps its text on the heap, behind an [`Arc`], so cloning
/// an id never copies or aliases mutable state.
///
/// Ids order by their 128-bit value first. Kinds whose value is packed text
/// ([`IdKind::ShortStr`], [`IdKind::Null`], and the first 16 bytes of a
/// [`IdKind::Str`]) therefore sort in byte-string order, and so do
/// [`IdKind::Base64_96`] tokens. Ties fall back to the full text of a
/// [`IdKind::Str`], then to the kind.
///
/// # Example
///
/// ```
/// use polyid::{Id, IdKind};
///
/// let id: Id = "+++/uRXa99O0T0+w".parse().unwrap();
/// assert_eq!(id.kind(), IdKind::Base64_96);
/// assert!(id < Id::from("+++0Rk1K99Oe/3aw"));
/// assert_eq!(id.string_len(), 16);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Id {
    kind: IdKind,
    hi: u64,
    lo: u64,
    text: Option<Arc<str>>,
}

/// Largest decimal printed as a bare JSON number; larger ones are quoted.
pub const JSON_SAFE_MAX: u128 = i32::MAX as u128;

const NULL_TEXT: &str = "null";

impl Id {
    pub(crate) const fn packed(kind: IdKind, value: u128) -> Self {
        Self {
            kind,
            hi: (value >> 64) as u64,
            lo: value as u64,
            text: None,
        }
    }

    pub(crate) fn null() -> Self {
        Self::packed(IdKind::Null, pack_prefix(NULL_TEXT.as_bytes()))
    }

    pub(crate) fn uuid(uuid: Uuid, kind: IdKind) -> Self {
        debug_assert!(matches!(kind, IdKind::Uuid | IdKind::UuidCaps));
        Self::packed(kind, uuid.as_u128())
    }

    pub(crate) fn text(text: Arc<str>) -> Self {
        let key = pack_prefix(text.as_bytes());
        Self {
            text: Some(text),
            ..Self::packed(IdKind::Str, key)
        }
    }

    /// Returns a decimal id holding `value`.
    #[must_use]
    pub const fn big_dec(value: u128) -> Self {
        Self::packed(IdKind::BigDec, value)
    }

    /// The kind of this id.
    pub const fn kind(&self) -> IdKind {
        self.kind
    }

    /// The more significant word.
    pub const fn hi(&self) -> u64 {
        self.hi
    }

    /// The less significant word.
    pub const fn lo(&self) -> u64 {
        self.lo
    }

    /// Both words as one 128-bit value, `hi` on top.
    pub const fn value(&self) -> u128 {
        ((self.hi as u128) << 64) | self.lo as u128
    }

    /// Returns true for the default, empty id.
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, IdKind::None)
    }

    /// The integer of a [`IdKind::BigDec`] id.
    pub const fn as_u128(&self) -> Option<u128> {
        match self.kind {
            IdKind::BigDec => Some(self.value()),
            _ => None,
        }
    }

    /// The UUID of a [`IdKind::Uuid`] or [`IdKind::UuidCaps`] id.
    pub const fn as_uuid(&self) -> Option<Uuid> {
        match self.kind {
            IdKind::Uuid | IdKind::UuidCaps => Some(Uuid::from_u128(self.value())),
            _ => None,
        }
    }

    /// The retained text of a [`IdKind::Str`] id.
    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The canonical text, borrowed when the id already holds it.
    pub fn to_cow(&self) -> Cow<'_, str> {
        match &self.text {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(self.to_string()),
        }
    }

    /// Length in bytes of the canonical text, computed without building it.
    pub fn string_len(&self) -> usize {
        match self.kind {
            IdKind::None => 0,
            IdKind::Null => NULL_TEXT.len(),
            IdKind::Uuid | IdKind::UuidCaps => HYPHENATED_LEN,
            IdKind::Str => self.text.as_deref().map_or(0, str::len),
            IdKind::ShortStr => packed_len(self.value()),
            IdKind::BigDec => decimal_len(self.value()),
            IdKind::Goog128 => TOKEN_LEN,
            IdKind::Base64_96 => SORTABLE_LEN,
        }
    }

    /// A 64-bit hash that is stable across processes, platforms and releases.
    ///
    /// Equal ids always hash equal. Unlike the [`core::hash::Hash`] impl,
    /// which feeds whatever hasher the caller picks, this value can be
    /// persisted or used to partition data.
    pub fn stable_hash(&self) -> u64 {
        let mut hash = hash_128_to_64(self.kind as u64, self.hi);
        hash = hash_128_to_64(hash, self.lo);
        if let Some(text) = &self.text {
            let digest = blake3::hash(text.as_bytes());
            let mut word = [0_u8; 8];
            word.copy_from_slice(&digest.as_bytes()[..8]);
            hash = hash_128_to_64(hash, u64::from_le_bytes(word));
        }
        hash
    }

    /// Bytes consulted after the words when ordering: the text of a `Str`.
    fn overflow(&self) -> &[u8] {
        match &self.text {
            Some(text) => text.as_bytes(),
            None => &[],
        }
    }
}

/// Folds two words into one (the CityHash `Hash128to64` mixer).
const fn hash_128_to_64(a: u64, b: u64) -> u64 {
    const K_MUL: u64 = 0x9ddf_ea08_eb38_2d69;
    let mut x = (a ^ b).wrapping_mul(K_MUL);
    x ^= x >> 47;
    let mut y = (b ^ x).wrapping_mul(K_MUL);
    y ^= y >> 47;
    y.wrapping_mul(K_MUL)
}

impl Ord for Id {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.hi, self.lo)
            .cmp(&(other.hi, other.lo))
            .then_with(|| self.overflow().cmp(other.overflow()))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IdKind::None => Ok(()),
            IdKind::Null => f.write_str(NULL_TEXT),
            IdKind::Uuid => write!(f, "{:x}", Uuid::from_u128(self.value()).hyphenated()),
            IdKind::UuidCaps => write!(f, "{:X}", Uuid::from_u128(self.value()).hyphenated()),
            IdKind::Str => f.write_str(self.text.as_deref().unwrap_or_default()),
            IdKind::ShortStr => {
                let (buf, len) = unpack(self.value());
                f.write_str(core::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?)
            }
            IdKind::BigDec => write!(f, "{}", self.value()),
            IdKind::Goog128 => {
                let mut buf = [0_u8; TOKEN_LEN];
                encode_envelope(self.value(), &mut buf);
                f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
            }
            IdKind::Base64_96 => {
                let mut buf = [0_u8; SORTABLE_LEN];
                encode_sortable(self.value() & SORTABLE_MAX, &mut buf);
                f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
            }
        }
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({}, {:?})", self.kind, self.to_cow())
    }
}

impl FromStr for Id {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(classify(s))
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        classify(s)
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        classify(&s)
    }
}

impl From<&String> for Id {
    fn from(s: &String) -> Self {
        classify(s)
    }
}

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Self::big_dec(u128::from(value))
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Self::big_dec(u128::from(value))
    }
}

impl From<u128> for Id {
    fn from(value: u128) -> Self {
        Self::big_dec(value)
    }
}

impl TryFrom<i64> for Id {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from(i128::from(value))
    }
}

impl TryFrom<i128> for Id {
    type Error = Error;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        u128::try_from(value)
            .map(Self::big_dec)
            .map_err(|_| Error::NegativeInteger { value })
    }
}

impl From<Uuid> for Id {
    fn from(uuid: Uuid) -> Self {
        Self::uuid(uuid, IdKind::Uuid)
    }
}

impl From<&Id> for String {
    fn from(id: &Id) -> Self {
        id.to_string()
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.to_string()
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.string_len() == other.len() && self.to_cow() == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Id {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Id> for &str {
    fn eq(&self, other: &Id) -> bool {
        other == *self
    }
}
