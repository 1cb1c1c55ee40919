//! JSON bridge for [`Id`].
//!
//! Every id is written as a JSON string of its canonical text except a
//! [`IdKind::BigDec`] in `[0, 2^31 - 1]`, which is written as a bare number.
//! Larger integers are quoted because many JSON consumers read numbers into
//! 32-bit or floating-point slots and would silently round them.
//!
//! Reading accepts a non-negative integer as a [`IdKind::BigDec`] and runs any
//! string through the classifier, so `42` and `"42"` decode to the same id.
use crate::{Error, Id, IdKind, JSON_SAFE_MAX, classify};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for Id {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match (self.kind(), self.as_str()) {
            (IdKind::BigDec, _) if self.value() <= JSON_SAFE_MAX => s.serialize_u32(self.lo() as u32),
            (_, Some(text)) => s.serialize_str(text),
            _ => s.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(IdVisitor)
    }
}

/// Accepts the JSON forms an [`Id`] can be written in.
pub(crate) struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an identifier string or a non-negative integer")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(classify(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Id::from(v))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Id::from(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Id::try_from(v).map_err(de::Error::custom)
    }

    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Id::try_from(v).map_err(de::Error::custom)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(de::Error::custom(Error::InexactNumber { value: v }))
    }

    fn visit_bool<E>(self, _: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(de::Error::custom(Error::UnexpectedJson { found: "a boolean" }))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(de::Error::custom(Error::UnexpectedJson { found: "null" }))
    }
}
