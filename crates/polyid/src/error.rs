use thiserror::Error;

/// A result type defaulting to the crate [`enum@Error`].
///
/// Building, printing, comparing and hashing an [`crate::Id`] never fail. The
/// fallible paths are conversions from signed or floating-point numbers, which
/// the JSON bridge relies on.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `polyid` can produce.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A negative integer was offered where an identifier was expected.
    ///
    /// Decimal identifiers are unsigned, so there is no variant that can hold
    /// the value and print it back.
    #[error("negative integer {value} cannot be an identifier")]
    NegativeInteger {
        /// The rejected value.
        value: i128,
    },

    /// A number that is not an exact integer was offered.
    ///
    /// This covers fractions as well as integers too large for the decoder to
    /// have represented exactly. Quote the digits to keep them exact.
    #[error("number {value} is not an exact integer; quote it to keep its digits")]
    InexactNumber {
        /// The rejected value.
        value: f64,
    },

    /// A JSON node that is neither a string nor a number.
    #[error("expected an identifier string or integer, found {found}")]
    UnexpectedJson {
        /// Short description of the offending node.
        found: &'static str,
    },
}

impl Error {
    /// Returns true if the error came from a numeric input.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::NegativeInteger { .. } | Self::InexactNumber { .. }
        )
    }
}
