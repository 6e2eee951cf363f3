// unveil-core/src/strategies/direct_unicode.rs
//! Private Use Area mapping: U+E000 + byte.

use crate::strategies::is_printable_ascii;
use crate::strategy::{DecodingStrategy, StrategyId};

pub(crate) const PUA_BASE: u32 = 0xE000;
const PUA_LAST: u32 = 0xE0FF;

#[derive(Debug, Clone, Copy, Default)]
pub struct DirectUnicodeStrategy;

impl DecodingStrategy for DirectUnicodeStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::DirectUnicode
    }

    fn method(&self) -> &'static str {
        "Direct Unicode Mapping (PUA)"
    }

    fn confidence(&self) -> f64 {
        0.8
    }

    fn decode(&self, input: &str) -> Option<String> {
        decode_direct_unicode(input)
    }
}

/// Recovers printable ASCII from scalars in U+E000..=U+E0FF. Scalars outside
/// that block, or mapping outside printable ASCII, are dropped.
pub fn decode_direct_unicode(hidden: &str) -> Option<String> {
    let result: String = hidden
        .chars()
        .map(|c| c as u32)
        .filter(|cp| (PUA_BASE..=PUA_LAST).contains(cp))
        .map(|cp| cp - PUA_BASE)
        .filter(|&value| is_printable_ascii(value))
        .filter_map(char::from_u32)
        .collect();

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_pua_block() {
        assert_eq!(decode_direct_unicode("\u{E041}\u{E049}").as_deref(), Some("AI"));
    }

    #[test]
    fn test_drops_out_of_block_and_unprintable() {
        assert_eq!(
            decode_direct_unicode("\u{E001}\u{E041}\u{200B}\u{E100}\u{E07F}\u{E049}").as_deref(),
            Some("AI")
        );
    }

    #[test]
    fn test_nothing_recovered() {
        assert_eq!(decode_direct_unicode("\u{200B}\u{F000}"), None);
        assert_eq!(decode_direct_unicode(""), None);
    }
}
