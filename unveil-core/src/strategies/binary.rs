// unveil-core/src/strategies/binary.rs
//! Zero-width binary: ZWSP is 0, ZWNJ is 1, eight bits per byte.

use crate::strategies::pack_byte;
use crate::strategy::{DecodingStrategy, StrategyId};

pub(crate) const ZERO_BIT: char = '\u{200B}';
pub(crate) const ONE_BIT: char = '\u{200C}';

#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryStrategy;

impl DecodingStrategy for BinaryStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Binary
    }

    fn method(&self) -> &'static str {
        "Binary (ZWSP/ZWNJ)"
    }

    fn confidence(&self) -> f64 {
        0.7
    }

    fn decode(&self, input: &str) -> Option<String> {
        decode_binary(input)
    }
}

/// Reads ZWSP/ZWNJ as bits and packs them into bytes, most significant bit
/// first. Every other scalar (ZWJ and BOM delimiters included) is skipped, and
/// a trailing partial byte is dropped. Each byte becomes the character with
/// that value. `None` only when no bit was found at all.
pub fn decode_binary(hidden: &str) -> Option<String> {
    let bits: Vec<u8> = hidden
        .chars()
        .filter_map(|c| match c {
            ZERO_BIT => Some(0),
            ONE_BIT => Some(1),
            _ => None,
        })
        .collect();

    if bits.is_empty() {
        return None;
    }

    Some(bits.chunks_exact(8).map(|chunk| char::from(pack_byte(chunk))).collect())
}
