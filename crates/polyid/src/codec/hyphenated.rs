use uuid::Uuid;

/// Length of the hyphenated UUID form.
pub const HYPHENATED_LEN: usize = 36;

const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Letter case of the hex digits in a hyphenated UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexCase {
    Lower,
    Upper,
}

/// Parses the `8-4-4-4-12` hyphenated form when its letters share one case.
///
/// A UUID made only of decimal digits is reported as [`HexCase::Lower`], the
/// form it prints back in. Mixed case yields `None` because the packed value
/// cannot remember which letters were capitals.
pub fn parse_hyphenated(s: &str) -> Option<(Uuid, HexCase)> {
    let bytes = s.as_bytes();
    if bytes.len() != HYPHENATED_LEN {
        return None;
    }

    let mut lower = false;
    let mut upper = false;
    for (i, &b) in bytes.iter().enumerate() {
        if HYPHENS.contains(&i) {
            if b != b'-' {
                return None;
            }
            continue;
        }
        match b {
            b'0'..=b'9' => {}
            b'a'..=b'f' => lower = true,
            b'A'..=b'F' => upper = true,
            _ => return None,
        }
    }

    let case = match (lower, upper) {
        (true, true) => return None,
        (false, true) => HexCase::Upper,
        _ => HexCase::Lower,
    };
    Uuid::try_parse_ascii(bytes).ok().map(|uuid| (uuid, case))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_case() {
        let (lower, case) = parse_hyphenated("0828398c-5965-11e0-84c8-0026b937c8e1").unwrap();
        assert_eq!(case, HexCase::Lower);
        let (upper, case) = parse_hyphenated("0828398C-5965-11E0-84C8-0026B937C8E1").unwrap();
        assert_eq!(case, HexCase::Upper);
        assert_eq!(lower, upper);
    }

    #[test]
    fn digits_only_is_lower() {
        let (_, case) = parse_hyphenated("12345678-1234-1234-1234-123456789012").unwrap();
        assert_eq!(case, HexCase::Lower);
    }

    #[test]
    fn rejects_mixed_case_and_other_shapes() {
        assert!(parse_hyphenated("0828398C-5965-11e0-84c8-0026b937c8e1").is_none());
        assert!(parse_hyphenated("0828398c596511e084c80026b937c8e1").is_none());
        assert!(parse_hyphenated("{828398c-5965-11e0-84c8-0026b937c8e1}").is_none());
        assert!(parse_hyphenated("0828398c-5965-11e0-84c8_0026b937c8e1").is_none());
        assert!(parse_hyphenated("0828398g-5965-11e0-84c8-0026b937c8e1").is_none());
    }
}
