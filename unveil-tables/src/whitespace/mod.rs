// unveil-tables/src/whitespace/mod.rs

/// The eight whitespace variants used by the whitespace-variation scheme.
/// A variant's position in this table is its 3-bit value.
pub static WHITESPACE_VARIANTS: [char; 8] = [
    '\u{0020}', // space
    '\u{00A0}', // no-break space
    '\u{2000}', // en quad
    '\u{2001}', // em quad
    '\u{2002}', // en space
    '\u{2003}', // em space
    '\u{2004}', // three-per-em space
    '\u{2005}', // four-per-em space
];

/// The 3-bit value of a whitespace variant.
pub fn variant_index(c: char) -> Option<u8> {
    WHITESPACE_VARIANTS.iter().position(|&w| w == c).map(|i| i as u8)
}

/// The whitespace variant for a 3-bit value. Only the low three bits are used.
pub fn variant(value: u8) -> char {
    WHITESPACE_VARIANTS[(value & 0b111) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for v in 0u8..8 {
            assert_eq!(variant_index(variant(v)), Some(v));
        }
    }

    #[test]
    fn test_only_low_bits_select() {
        assert_eq!(variant(8), variant(0));
        assert_eq!(variant(15), '\u{2005}');
    }

    #[test]
    fn test_unknown_whitespace() {
        assert_eq!(variant_index('\t'), None);
        assert_eq!(variant_index('\u{2006}'), None);
    }
}
