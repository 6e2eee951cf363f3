// unveil-tables/src/names/mod.rs
//! Official Unicode names for the format, space, joiner and directional
//! characters that show up in hidden-text attacks.
//!
//! This is not a full character database. It covers the characters the
//! classifier is expected to describe; everything else falls back to a
//! synthesized, range-based description in `unveil-core`.

use core::fmt;

use crate::CodePoint;

/// An official character name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Name {
    Static(&'static str),
    /// `VARIATION SELECTOR-n`, named arithmetically.
    VariationSelector(u16),
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Static(s) => f.write_str(s),
            Name::VariationSelector(n) => write!(f, "VARIATION SELECTOR-{}", n),
        }
    }
}

// Sorted by code point; `lookup` relies on it.
static NAMES: &[(CodePoint, &str)] = &[
    (0x00A0, "NO-BREAK SPACE"),
    (0x00AD, "SOFT HYPHEN"),
    (0x034F, "COMBINING GRAPHEME JOINER"),
    (0x061C, "ARABIC LETTER MARK"),
    (0x1680, "OGHAM SPACE MARK"),
    (0x180E, "MONGOLIAN VOWEL SEPARATOR"),
    (0x2000, "EN QUAD"),
    (0x2001, "EM QUAD"),
    (0x2002, "EN SPACE"),
    (0x2003, "EM SPACE"),
    (0x2004, "THREE-PER-EM SPACE"),
    (0x2005, "FOUR-PER-EM SPACE"),
    (0x2006, "SIX-PER-EM SPACE"),
    (0x2007, "FIGURE SPACE"),
    (0x2008, "PUNCTUATION SPACE"),
    (0x2009, "THIN SPACE"),
    (0x200A, "HAIR SPACE"),
    (0x200B, "ZERO WIDTH SPACE"),
    (0x200C, "ZERO WIDTH NON-JOINER"),
    (0x200D, "ZERO WIDTH JOINER"),
    (0x200E, "LEFT-TO-RIGHT MARK"),
    (0x200F, "RIGHT-TO-LEFT MARK"),
    (0x2028, "LINE SEPARATOR"),
    (0x2029, "PARAGRAPH SEPARATOR"),
    (0x202A, "LEFT-TO-RIGHT EMBEDDING"),
    (0x202B, "RIGHT-TO-LEFT EMBEDDING"),
    (0x202C, "POP DIRECTIONAL FORMATTING"),
    (0x202D, "LEFT-TO-RIGHT OVERRIDE"),
    (0x202E, "RIGHT-TO-LEFT OVERRIDE"),
    (0x202F, "NARROW NO-BREAK SPACE"),
    (0x205F, "MEDIUM MATHEMATICAL SPACE"),
    (0x2060, "WORD JOINER"),
    (0x2061, "FUNCTION APPLICATION"),
    (0x2062, "INVISIBLE TIMES"),
    (0x2063, "INVISIBLE SEPARATOR"),
    (0x2064, "INVISIBLE PLUS"),
    (0x2066, "LEFT-TO-RIGHT ISOLATE"),
    (0x2067, "RIGHT-TO-LEFT ISOLATE"),
    (0x2068, "FIRST STRONG ISOLATE"),
    (0x2069, "POP DIRECTIONAL ISOLATE"),
    (0x3000, "IDEOGRAPHIC SPACE"),
    (0xFEFF, "ZERO WIDTH NO-BREAK SPACE"),
];

/// Looks up the official name of `cp`, if this table knows it.
pub fn lookup(cp: CodePoint) -> Option<Name> {
    match cp {
        0xFE00..=0xFE0F => return Some(Name::VariationSelector((cp - 0xFE00 + 1) as u16)),
        0xE0100..=0xE01EF => return Some(Name::VariationSelector((cp - 0xE0100 + 17) as u16)),
        _ => {}
    }
    NAMES
        .binary_search_by_key(&cp, |&(k, _)| k)
        .ok()
        .map(|i| Name::Static(NAMES[i].1))
}
