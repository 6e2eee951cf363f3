// unveil-tables/src/homoglyph/mod.rs
//! One-to-one mapping between ASCII characters and visually confusable
//! non-ASCII code points.
//!
//! Every entry is flagged by the classifier. Only entries marked
//! `substitutable` take part in the homoglyph encoding: the bit stream is
//! defined by exactly those positions, so adding or removing one changes what
//! every existing encoded text decodes to.

/// A single ASCII character and its lookalike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Homoglyph {
    pub ascii: char,
    pub glyph: char,
    pub description: &'static str,
    /// Whether the encoder may swap `ascii` for `glyph`.
    pub substitutable: bool,
}

const fn entry(ascii: char, glyph: char, description: &'static str) -> Homoglyph {
    Homoglyph { ascii, glyph, description, substitutable: true }
}

/// A lookalike that is reported but never used to carry bits.
const fn detect_only(ascii: char, glyph: char, description: &'static str) -> Homoglyph {
    Homoglyph { ascii, glyph, description, substitutable: false }
}

/// The homoglyph table. Every `ascii` and every `glyph` appears exactly once,
/// which keeps the forward and reverse lookups exact inverses.
pub static HOMOGLYPHS: [Homoglyph; 17] = [
    entry('a', '\u{0430}', "CYRILLIC SMALL LETTER A (looks like Latin a)"),
    entry('c', '\u{0441}', "CYRILLIC SMALL LETTER ES (looks like Latin c)"),
    entry('e', '\u{0435}', "CYRILLIC SMALL LETTER IE (looks like Latin e)"),
    entry('o', '\u{043E}', "CYRILLIC SMALL LETTER O (looks like Latin o)"),
    entry('p', '\u{0440}', "CYRILLIC SMALL LETTER ER (looks like Latin p)"),
    detect_only('s', '\u{0455}', "CYRILLIC SMALL LETTER DZE (looks like Latin s)"),
    entry('x', '\u{0445}', "CYRILLIC SMALL LETTER HA (looks like Latin x)"),
    entry('y', '\u{0443}', "CYRILLIC SMALL LETTER U (looks like Latin y)"),
    entry('3', '\u{0437}', "CYRILLIC SMALL LETTER ZE (looks like digit 3)"),
    entry('B', '\u{0412}', "CYRILLIC CAPITAL LETTER VE (looks like Latin B)"),
    entry('C', '\u{0421}', "CYRILLIC CAPITAL LETTER ES (looks like Latin C)"),
    entry('H', '\u{041D}', "CYRILLIC CAPITAL LETTER EN (looks like Latin H)"),
    entry('P', '\u{0420}', "CYRILLIC CAPITAL LETTER ER (looks like Latin P)"),
    entry('X', '\u{0425}', "CYRILLIC CAPITAL LETTER HA (looks like Latin X)"),
    entry('-', '\u{2010}', "HYPHEN (looks like hyphen-minus)"),
    entry('.', '\u{2024}', "ONE DOT LEADER (looks like full stop)"),
    entry(',', '\u{201A}', "SINGLE LOW-9 QUOTATION MARK (looks like comma)"),
];

fn substitutions() -> impl Iterator<Item = &'static Homoglyph> {
    HOMOGLYPHS.iter().filter(|h| h.substitutable)
}

/// Forward lookup: the substitute for an ASCII character.
pub fn glyph_for(ascii: char) -> Option<char> {
    substitutions().find(|h| h.ascii == ascii).map(|h| h.glyph)
}

/// Reverse lookup: the ASCII character a substitute imitates.
pub fn ascii_for(glyph: char) -> Option<char> {
    substitutions().find(|h| h.glyph == glyph).map(|h| h.ascii)
}

pub fn is_glyph(c: char) -> bool {
    ascii_for(c).is_some()
}

/// True when `c` is an ASCII character that could have been substituted.
pub fn has_glyph(c: char) -> bool {
    glyph_for(c).is_some()
}

/// Describes a lookalike code point, substitutable or not.
pub fn describe(cp: u32) -> Option<&'static str> {
    HOMOGLYPHS.iter().find(|h| h.glyph as u32 == cp).map(|h| h.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_reverse_are_inverses() {
        for h in substitutions() {
            assert_eq!(glyph_for(h.ascii), Some(h.glyph));
            assert_eq!(ascii_for(h.glyph), Some(h.ascii));
        }
    }

    #[test]
    fn test_dze_is_described_but_not_substituted() {
        assert_eq!(substitutions().count(), 16);
        assert!(!has_glyph('s'));
        assert!(!is_glyph('\u{0455}'));
        assert_eq!(glyph_for('s'), None);
        assert_eq!(
            describe(0x0455),
            Some("CYRILLIC SMALL LETTER DZE (looks like Latin s)")
        );
    }

    #[test]
    fn test_no_duplicate_sources_or_targets() {
        for (i, a) in HOMOGLYPHS.iter().enumerate() {
            for b in HOMOGLYPHS.iter().skip(i + 1) {
                assert_ne!(a.ascii, b.ascii, "duplicate source {:?}", a.ascii);
                assert_ne!(a.glyph, b.glyph, "duplicate target {:?}", a.glyph);
            }
        }
    }

    #[test]
    fn test_sources_are_ascii_and_targets_are_not() {
        for h in HOMOGLYPHS.iter() {
            assert!(h.ascii.is_ascii());
            assert!(!h.glyph.is_ascii());
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(0x0430),
            Some("CYRILLIC SMALL LETTER A (looks like Latin a)")
        );
        assert_eq!(describe('a' as u32), None);
    }
}
