// unveil-core/src/strategies/homoglyph.rs
//! Homoglyph substitution, read from the full text.
//!
//! Every position that holds a substitutable ASCII character or one of its
//! lookalikes carries one bit: 1 if the lookalike is present, 0 if not.

use unveil_tables::homoglyph::{has_glyph, is_glyph};

use crate::strategies::{is_printable_ascii, pack_byte};
use crate::strategy::{DecodingStrategy, StrategyId, StrategyInput};

#[derive(Debug, Clone, Copy, Default)]
pub struct HomoglyphStrategy;

impl DecodingStrategy for HomoglyphStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Homoglyph
    }

    fn method(&self) -> &'static str {
        "Homoglyph Substitution"
    }

    fn confidence(&self) -> f64 {
        0.5
    }

    fn input(&self) -> StrategyInput {
        StrategyInput::FullText
    }

    fn decode(&self, input: &str) -> Option<String> {
        decode_homoglyphs(input)
    }
}

/// Rebuilds the bit stream from substitution opportunities, packs it into
/// bytes (dropping a trailing partial byte) and keeps printable ASCII.
/// `None` only when the text had no substitution opportunity at all.
pub fn decode_homoglyphs(text: &str) -> Option<String> {
    let bits: Vec<u8> = text
        .chars()
        .filter_map(|c| {
            if is_glyph(c) {
                Some(1)
            } else if has_glyph(c) {
                Some(0)
            } else {
                None
            }
        })
        .collect();

    if bits.is_empty() {
        return None;
    }

    Some(
        bits.chunks_exact(8)
            .map(pack_byte)
            .filter(|&byte| is_printable_ascii(u32::from(byte)))
            .map(char::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_substitutions_as_ones() {
        // "H" = 01001000 over eight opportunities: a c e o p c x y
        let text = "a\u{0441}eo\u{0440}cxy";
        assert_eq!(decode_homoglyphs(text).as_deref(), Some("H"));
    }

    #[test]
    fn test_ignores_other_characters() {
        let text = "a!\u{0441}  e zz o\u{0440}qq c x y";
        assert_eq!(decode_homoglyphs(text).as_deref(), Some("H"));
    }

    #[test]
    fn test_zero_bytes_are_dropped() {
        assert_eq!(decode_homoglyphs("aceopcxy").as_deref(), Some(""));
    }

    #[test]
    fn test_plain_s_carries_no_bit() {
        // Only "e a o p e a c e" are positions; both s are skipped.
        let text = "se\u{0430} of p\u{0435}ace";
        assert_eq!(decode_homoglyphs(text).as_deref(), Some("H"));
        assert_eq!(decode_homoglyphs("ssss"), None);
    }

    #[test]
    fn test_no_opportunities() {
        assert_eq!(decode_homoglyphs("bdfghijk"), None);
        assert_eq!(decode_homoglyphs(""), None);
    }
}
