// unveil-core/src/classifier.rs
//! Decides, per code point, whether it belongs in ordinary text.
//!
//! Rules are applied in order and the first match wins:
//!
//! 1. Tab, LF, CR, printable ASCII and the common ranges are ordinary.
//! 2. Anything in a suspicious range (zero-width, bidi controls, C0/C1,
//!    private use, surrogates, noncharacters) is suspicious.
//! 3. Known homoglyph targets are suspicious.
//! 4. Unicode whitespace other than space, tab, LF and CR is suspicious.
//! 5. Otherwise the description decides: it is suspicious only when it names
//!    one of [`SUSPICIOUS_CATEGORIES`].
//!
//! Unknown code points default to ordinary. Flagging ordinary multilingual
//! text is worse than missing an exotic character here.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unveil_tables::names::{self, Name};
use unveil_tables::{homoglyph, ranges, CodePoint};

/// Description phrases that mark a character as suspicious.
pub const SUSPICIOUS_CATEGORIES: [&str; 12] = [
    "ZERO WIDTH",
    "INVISIBLE",
    "CONTROL",
    "FORMATTING",
    "VARIATION",
    "JOINER",
    "DIRECTION",
    "BIDIRECTIONAL",
    "HOMOGLYPH",
    "PRIVATE USE",
    "SURROGATE",
    "NONCHARACTER",
];

/// The verdict for a single code point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_suspicious: bool,
    pub description: String,
}

pub fn classify(c: char) -> Classification {
    classify_code_point(c as CodePoint)
}

/// Classifies a raw code point. Accepts values a `char` cannot hold
/// (surrogates), which are always suspicious.
pub fn classify_code_point(cp: CodePoint) -> Classification {
    Classification {
        is_suspicious: is_suspicious_code_point(cp),
        description: describe_code_point(cp).into_owned(),
    }
}

pub fn is_suspicious(c: char) -> bool {
    is_suspicious_code_point(c as CodePoint)
}

pub fn is_suspicious_code_point(cp: CodePoint) -> bool {
    if ranges::is_common(cp) {
        return false;
    }
    if ranges::is_in_suspicious_range(cp) {
        return true;
    }
    if homoglyph::describe(cp).is_some() {
        return true;
    }
    if is_exotic_whitespace(cp) {
        return true;
    }
    names_suspicious_category(&describe_code_point(cp))
}

/// A human-readable description of `c`.
pub fn describe(c: char) -> Cow<'static, str> {
    describe_code_point(c as CodePoint)
}

/// Homoglyph descriptions win, then official names, then a description
/// synthesized from the range the code point falls in.
pub fn describe_code_point(cp: CodePoint) -> Cow<'static, str> {
    if let Some(description) = homoglyph::describe(cp) {
        return Cow::Borrowed(description);
    }
    match names::lookup(cp) {
        Some(Name::Static(name)) => Cow::Borrowed(name),
        Some(name) => Cow::Owned(name.to_string()),
        None => Cow::Borrowed(synthesize_description(cp)),
    }
}

fn synthesize_description(cp: CodePoint) -> &'static str {
    match cp {
        0x0000..=0x001F => "C0 CONTROL CHARACTER",
        0x007F => "DELETE CONTROL CHARACTER",
        0x0080..=0x009F => "C1 CONTROL CHARACTER",
        0x200B => "ZERO WIDTH SPACE",
        0x200C => "ZERO WIDTH NON-JOINER",
        0x200D => "ZERO WIDTH JOINER",
        0x200E => "LEFT-TO-RIGHT MARK",
        0x200F => "RIGHT-TO-LEFT MARK",
        0x202A..=0x202E => "BIDIRECTIONAL CONTROL CHARACTER",
        0x2066..=0x2069 => "BIDIRECTIONAL ISOLATE CONTROL",
        0xFEFF => "ZERO WIDTH NO-BREAK SPACE (BYTE ORDER MARK)",
        _ if ranges::is_private_use(cp) => "PRIVATE USE CHARACTER",
        _ if ranges::is_surrogate(cp) => "SURROGATE CODE POINT",
        _ if ranges::is_noncharacter(cp) => "NONCHARACTER",
        _ => "SUSPICIOUS CHARACTER",
    }
}

fn is_exotic_whitespace(cp: CodePoint) -> bool {
    char::from_u32(cp)
        .map_or(false, |c| c.is_whitespace() && !matches!(c, ' ' | '\t' | '\n' | '\r'))
}

fn names_suspicious_category(description: &str) -> bool {
    let upper = description.to_uppercase();
    SUSPICIOUS_CATEGORIES.iter().any(|category| upper.contains(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_ascii_is_never_suspicious() {
        for cp in 0x20..=0x7E {
            assert!(!is_suspicious_code_point(cp), "U+{:04X} flagged", cp);
        }
    }

    #[test]
    fn test_tab_lf_cr_are_ordinary() {
        assert!(!is_suspicious('\t'));
        assert!(!is_suspicious('\n'));
        assert!(!is_suspicious('\r'));
        assert!(is_suspicious('\u{000B}'));
        assert!(is_suspicious('\0'));
    }

    #[test]
    fn test_suspicious_ranges() {
        for cp in (0x200B..=0x200F).chain(0xD800..=0xDFFF).chain([0xE000, 0xF8FF, 0xF0000, 0x10FFFD]) {
            assert!(is_suspicious_code_point(cp), "U+{:04X} not flagged", cp);
        }
    }

    #[test]
    fn test_noncharacters_on_every_plane() {
        assert!(is_suspicious_code_point(0xFDD0));
        assert!(is_suspicious_code_point(0x1FFFE));
        assert!(is_suspicious_code_point(0x5FFFF));
    }

    #[test]
    fn test_common_ranges_win() {
        // Latin-1, dashes, currency, arrows, maths.
        for c in ['é', '\u{00A0}', '–', '€', '→', '∑'] {
            assert!(!is_suspicious(c), "{:?} flagged", c);
        }
        // A homoglyph target inside a common range stays ordinary.
        assert!(!is_suspicious('\u{2010}'));
    }

    #[test]
    fn test_homoglyph_targets() {
        let verdict = classify('\u{0430}');
        assert!(verdict.is_suspicious);
        assert_eq!(verdict.description, "CYRILLIC SMALL LETTER A (looks like Latin a)");
    }

    #[test]
    fn test_exotic_whitespace() {
        for c in ['\u{2000}', '\u{2005}', '\u{2009}', '\u{3000}', '\u{2028}', '\u{1680}'] {
            assert!(is_suspicious(c), "{:?} not flagged", c);
        }
    }

    #[test]
    fn test_category_names() {
        assert!(is_suspicious('\u{FE0F}'));
        assert_eq!(describe('\u{FE0F}'), "VARIATION SELECTOR-16");
        assert!(is_suspicious('\u{034F}'));
    }

    #[test]
    fn test_ordinary_multilingual_text() {
        for c in "Привет мир 你好 こんにちは مرحبا שלום".chars() {
            if c == ' ' {
                continue;
            }
            // Cyrillic homoglyph targets are the one intended exception.
            if homoglyph::describe(c as u32).is_some() {
                continue;
            }
            assert!(!is_suspicious(c), "{:?} flagged", c);
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(describe('\u{200B}'), "ZERO WIDTH SPACE");
        assert_eq!(describe('\u{0001}'), "C0 CONTROL CHARACTER");
        assert_eq!(describe('\u{007F}'), "DELETE CONTROL CHARACTER");
        assert_eq!(describe('\u{0090}'), "C1 CONTROL CHARACTER");
        assert_eq!(describe('\u{E123}'), "PRIVATE USE CHARACTER");
        assert_eq!(describe_code_point(0xD801), "SURROGATE CODE POINT");
        assert_eq!(describe('\u{FDD5}'), "NONCHARACTER");
        assert_eq!(describe('中'), "SUSPICIOUS CHARACTER");
    }

    #[test]
    fn test_synthesized_fallbacks() {
        assert_eq!(synthesize_description(0xFEFF), "ZERO WIDTH NO-BREAK SPACE (BYTE ORDER MARK)");
        assert_eq!(synthesize_description(0x202E), "BIDIRECTIONAL CONTROL CHARACTER");
        assert_eq!(synthesize_description(0x2067), "BIDIRECTIONAL ISOLATE CONTROL");
    }
}
