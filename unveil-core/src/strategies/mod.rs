// unveil-core/src/strategies/mod.rs
//! The built-in `DecodingStrategy` implementations, one file per scheme.
//!
//! To add a strategy, create a file here, implement `DecodingStrategy`, give it
//! a `StrategyId` and register it in [`default_strategies`] at the position it
//! should run.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod ascii;
pub mod binary;
pub mod direct_unicode;
pub mod homoglyph;
pub mod raw_points;
pub mod whitespace;

pub use ascii::{decode_as_ascii, AsciiStrategy};
pub use binary::{decode_binary, BinaryStrategy};
pub use direct_unicode::{decode_direct_unicode, DirectUnicodeStrategy};
pub use homoglyph::{decode_homoglyphs, HomoglyphStrategy};
pub use raw_points::{raw_code_points, RawPointsStrategy};
pub use whitespace::{decode_whitespace, WhitespaceStrategy};

use crate::strategy::DecodingStrategy;

/// Every built-in strategy, in execution order.
pub fn default_strategies() -> Vec<Box<dyn DecodingStrategy>> {
    vec![
        Box::new(RawPointsStrategy),
        Box::new(BinaryStrategy),
        Box::new(DirectUnicodeStrategy),
        Box::new(WhitespaceStrategy),
        Box::new(AsciiStrategy),
        Box::new(HomoglyphStrategy),
    ]
}

/// Printable ASCII, `[0x20, 0x7E]`.
#[inline]
pub(crate) fn is_printable_ascii(value: u32) -> bool {
    (0x20..=0x7E).contains(&value)
}

/// Packs up to eight bits, most significant first.
pub(crate) fn pack_byte(bits: &[u8]) -> u8 {
    bits.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyId;

    #[test]
    fn test_default_order() {
        let ids: Vec<StrategyId> = default_strategies().iter().map(|s| s.id()).collect();
        assert_eq!(ids, StrategyId::ALL.to_vec());
    }

    #[test]
    fn test_confidences_are_fixed() {
        let confidences: Vec<f64> = default_strategies().iter().map(|s| s.confidence()).collect();
        assert_eq!(confidences, vec![1.0, 0.7, 0.8, 0.65, 0.6, 0.5]);
    }

    #[test]
    fn test_pack_byte() {
        assert_eq!(pack_byte(&[0, 1, 0, 0, 1, 0, 0, 0]), b'H');
        assert_eq!(pack_byte(&[1, 1, 1, 1, 1, 1, 1, 1]), 0xFF);
    }
}
