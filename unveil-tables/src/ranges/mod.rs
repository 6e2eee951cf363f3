// unveil-tables/src/ranges/mod.rs
use crate::CodePoint;

/// An inclusive `[low, high]` span of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    pub low: CodePoint,
    pub high: CodePoint,
}

impl CodePointRange {
    pub const fn new(low: CodePoint, high: CodePoint) -> Self {
        Self { low, high }
    }

    pub const fn single(value: CodePoint) -> Self {
        Self { low: value, high: value }
    }

    #[inline]
    pub const fn contains(&self, cp: CodePoint) -> bool {
        cp >= self.low && cp <= self.high
    }
}

/// An ordered, immutable set of disjoint ranges.
///
/// The tables are small (a few dozen entries at most), so membership is a
/// linear scan.
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    pub name: &'static str,
    entries: &'static [CodePointRange],
}

impl RangeTable {
    pub const fn new(name: &'static str, entries: &'static [CodePointRange]) -> Self {
        Self { name, entries }
    }

    pub fn contains(&self, cp: CodePoint) -> bool {
        self.entries.iter().any(|r| r.contains(cp))
    }

    pub fn entries(&self) -> &'static [CodePointRange] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tab, LF, CR and printable ASCII.
pub static ALLOWED_CODE_POINTS: RangeTable = RangeTable::new(
    "allowed",
    &[
        CodePointRange::new(0x0009, 0x000A),
        CodePointRange::single(0x000D),
        CodePointRange::new(0x0020, 0x007E),
    ],
);

/// Ranges of ordinary text that are never flagged.
pub static COMMON_RANGES: RangeTable = RangeTable::new(
    "common",
    &[
        // Printable ASCII
        CodePointRange::new(0x0020, 0x007E),
        // Latin-1 supplement
        CodePointRange::new(0x00A0, 0x00FF),
        // Hyphens, dashes, quotes, bullets
        CodePointRange::new(0x2010, 0x2027),
        // Per mille, primes, guillemets
        CodePointRange::new(0x2030, 0x2043),
        // Currency symbols
        CodePointRange::new(0x20A0, 0x20CF),
        // Arrows
        CodePointRange::new(0x2190, 0x21FF),
        // Mathematical operators
        CodePointRange::new(0x2200, 0x22FF),
    ],
);

/// Ranges commonly abused to hide or reorder content.
pub static SUSPICIOUS_RANGES: RangeTable = RangeTable::new(
    "suspicious",
    &[
        // C0 controls
        CodePointRange::new(0x0000, 0x001F),
        // DEL and C1 controls
        CodePointRange::new(0x007F, 0x009F),
        // Zero width space, joiners, directional marks
        CodePointRange::new(0x200B, 0x200F),
        // Bidirectional embedding controls
        CodePointRange::new(0x202A, 0x202E),
        // Word joiner and invisible operators
        CodePointRange::new(0x2060, 0x2064),
        // Bidirectional isolates
        CodePointRange::new(0x2066, 0x2069),
        // Surrogates
        CodePointRange::new(0xD800, 0xDFFF),
        // Private Use Area
        CodePointRange::new(0xE000, 0xF8FF),
        // Noncharacters
        CodePointRange::new(0xFDD0, 0xFDEF),
        // Byte order mark
        CodePointRange::single(0xFEFF),
        CodePointRange::new(0xFFFE, 0xFFFF),
        // Supplementary Private Use Area-A
        CodePointRange::new(0xF0000, 0xFFFFD),
        // Supplementary Private Use Area-B
        CodePointRange::new(0x100000, 0x10FFFD),
    ],
);

/// True for the 66 Unicode noncharacters.
#[inline]
pub const fn is_noncharacter(cp: CodePoint) -> bool {
    (cp >= 0xFDD0 && cp <= 0xFDEF) || (cp & 0xFFFE) == 0xFFFE
}

#[inline]
pub const fn is_private_use(cp: CodePoint) -> bool {
    (cp >= 0xE000 && cp <= 0xF8FF)
        || (cp >= 0xF0000 && cp <= 0xFFFFD)
        || (cp >= 0x100000 && cp <= 0x10FFFD)
}

#[inline]
pub const fn is_surrogate(cp: CodePoint) -> bool {
    cp >= 0xD800 && cp <= 0xDFFF
}

/// True when `cp` is allow-listed or falls in a common range.
pub fn is_common(cp: CodePoint) -> bool {
    ALLOWED_CODE_POINTS.contains(cp) || COMMON_RANGES.contains(cp)
}

/// True when `cp` falls in a suspicious range or is a noncharacter.
pub fn is_in_suspicious_range(cp: CodePoint) -> bool {
    SUSPICIOUS_RANGES.contains(cp) || is_noncharacter(cp)
}
