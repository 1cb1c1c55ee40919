use core::fmt;

/// The interpretation of an [`crate::Id`]'s two words.
///
/// Variants are listed in tie-break order: when two ids have identical words
/// and text, the one whose kind is declared first sorts first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum IdKind {
    /// The empty identifier.
    #[default]
    None = 0,
    /// The identifier whose text is `null`. Not the absence of an id.
    Null = 1,
    /// A UUID printed in lowercase.
    Uuid = 2,
    /// A UUID printed in uppercase.
    UuidCaps = 3,
    /// Text that does not fit any packed form; the only kind that allocates.
    Str = 4,
    /// Up to 16 bytes of text packed into the words.
    ShortStr = 5,
    /// An unsigned decimal integer of up to 128 bits.
    BigDec = 6,
    /// A Google-style base64url token wrapping 128 bits.
    Goog128 = 7,
    /// A 16-symbol sortable base64 token carrying 96 bits.
    #[allow(non_camel_case_types)]
    Base64_96 = 8,
}

impl IdKind {
    /// Every kind, in tie-break order.
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Null,
        Self::Uuid,
        Self::UuidCaps,
        Self::Str,
        Self::ShortStr,
        Self::BigDec,
        Self::Goog128,
        Self::Base64_96,
    ];

    /// Stable upper-case name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Null => "NULLID",
            Self::Uuid => "UUID",
            Self::UuidCaps => "UUID_CAPS",
            Self::Str => "STR",
            Self::ShortStr => "SHORTSTR",
            Self::BigDec => "BIGDEC",
            Self::Goog128 => "GOOG128",
            Self::Base64_96 => "BASE64_96",
        }
    }

    /// Returns true if the whole value lives in the two words.
    pub const fn is_packed(self) -> bool {
        !matches!(self, Self::Str)
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        assert!(IdKind::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(IdKind::ALL.map(|k| k as u8), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn only_str_allocates() {
        let unpacked: Vec<_> = IdKind::ALL.into_iter().filter(|k| !k.is_packed()).collect();
        assert_eq!(unpacked, [IdKind::Str]);
        assert_eq!(IdKind::default(), IdKind::None);
        assert_eq!(IdKind::Base64_96.to_string(), "BASE64_96");
    }
}
