//! Decimal digit runs in any script.
//!
//! `\d` in a Unicode regex matches every `Nd` (decimal digit) character, not
//! only ASCII. Each `Nd` block is ten consecutive code points starting at the
//! script's zero, so a digit's value is its offset from that zero.

/// First code point (the zero) of each block of ten decimal digits, ascending.
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x10D40, 0x11066, 0x110F0, 0x11136,
    0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x116D0, 0x116DA, 0x11730, 0x118E0,
    0x11950, 0x11BF0, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16130, 0x16A60, 0x16AC0, 0x16B50,
    0x16D70, 0x1CCF0, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0,
    0x1E5F1, 0x1E950, 0x1FBF0,
];

/// Value of a single decimal digit character, in any script.
pub fn digit_value(c: char) -> Option<u64> {
    let code = c as u32;
    let idx = DIGIT_ZEROS.partition_point(|&zero| zero <= code);
    let zero = DIGIT_ZEROS[..idx].last()?;
    let offset = code - zero;
    (offset < 10).then_some(offset as u64)
}

/// Value of a run of decimal digits.
///
/// Scripts may be mixed. Returns `None` for an empty run, a non-digit
/// character, or a value that does not fit in a `u64`.
pub fn parse_decimal(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u64, |acc, c| {
        acc.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_digits() {
        assert_eq!(parse_decimal("0"), Some(0));
        assert_eq!(parse_decimal("500"), Some(500));
        assert_eq!(parse_decimal("18446744073709551615"), Some(u64::MAX));
    }

    #[test]
    fn other_scripts() {
        assert_eq!(parse_decimal("\u{0665}\u{0660}"), Some(50)); // Arabic-Indic
        assert_eq!(parse_decimal("\u{06F1}\u{06F2}"), Some(12)); // Extended Arabic-Indic
        assert_eq!(parse_decimal("\u{0967}\u{0966}\u{0966}"), Some(100)); // Devanagari
        assert_eq!(parse_decimal("\u{FF13}\u{FF10}"), Some(30)); // Fullwidth
        assert_eq!(parse_decimal("\u{1D7D9}"), Some(1)); // Double-struck
    }

    #[test]
    fn mixed_scripts() {
        assert_eq!(parse_decimal("\u{0665}0"), Some(50));
    }

    #[test]
    fn block_boundaries() {
        assert_eq!(digit_value('0'), Some(0));
        assert_eq!(digit_value('9'), Some(9));
        assert_eq!(digit_value('\u{0669}'), Some(9));
        assert_eq!(digit_value(':'), None);
        assert_eq!(digit_value('/'), None);
        assert_eq!(digit_value('a'), None);
    }

    #[test]
    fn overflow_and_empty() {
        assert_eq!(parse_decimal("18446744073709551616"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("1x"), None);
    }
}
