/// Writes every [`crate::Id`] as a JSON string, decimals included.
///
/// For schemas that want one JSON type per field. Reading is identical to the
/// default [`serde::Deserialize`] impl, so numbers are still accepted.
///
/// ```
/// use polyid::Id;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "polyid::as_string_id")]
///     key: Id,
/// }
///
/// let json = serde_json::to_string(&Row { key: Id::from(2_u64) }).unwrap();
/// assert_eq!(json, r#"{"key":"2"}"#);
/// ```
pub mod as_string_id {
    use crate::Id;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize an id as a string of its canonical text.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &Id, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match id.as_str() {
            Some(text) => s.serialize_str(text),
            None => s.collect_str(id),
        }
    }

    /// Deserialize an id from a string or a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the input is
    /// neither a string nor a non-negative integer.
    pub fn deserialize<'de, D>(d: D) -> Result<Id, D::Error>
    where
        D: Deserializer<'de>,
    {
        Id::deserialize(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Id, IdKind};
    use serde::{Deserialize, Serialize};

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(with = "as_string_id")]
        key: Id,
    }

    #[test]
    fn small_decimal_is_quoted() {
        let row = Row {
            key: Id::from(42_u64),
        };
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"key":"42"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
        assert_eq!(back.key.kind(), IdKind::BigDec);
    }

    #[test]
    fn still_reads_numbers() {
        let back: Row = serde_json::from_str(r#"{"key":7}"#).expect("deserialize");
        assert_eq!(back.key, Id::from(7_u64));
    }
}
