// unveil-core/src/strategies/whitespace.rs
//! Whitespace variation: each character is a triplet of whitespace variants
//! carrying 3 + 3 + 2 bits.

use unveil_tables::whitespace::variant_index;

use crate::strategies::is_printable_ascii;
use crate::strategy::{DecodingStrategy, StrategyId};

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceStrategy;

impl DecodingStrategy for WhitespaceStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Whitespace
    }

    fn method(&self) -> &'static str {
        "Whitespace Variation"
    }

    fn confidence(&self) -> f64 {
        0.65
    }

    fn decode(&self, input: &str) -> Option<String> {
        decode_whitespace(input)
    }
}

/// Reads consecutive, non-overlapping triplets. A triplet containing anything
/// outside the variant table is skipped; a trailing partial triplet is
/// dropped; only printable ASCII is kept.
pub fn decode_whitespace(hidden: &str) -> Option<String> {
    let scalars: Vec<char> = hidden.chars().collect();
    let mut result = String::new();

    for triplet in scalars.chunks_exact(3) {
        let (Some(first), Some(second), Some(third)) = (
            variant_index(triplet[0]),
            variant_index(triplet[1]),
            variant_index(triplet[2]),
        ) else {
            continue;
        };

        let code = u32::from(first) + u32::from(second) * 8 + u32::from(third) * 64;
        if is_printable_ascii(code) {
            if let Some(c) = char::from_u32(code) {
                result.push(c);
            }
        }
    }

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unveil_tables::whitespace::variant;

    fn triplet(byte: u8) -> String {
        [variant(byte % 8), variant((byte >> 3) % 8), variant((byte >> 6) % 8)]
            .iter()
            .collect()
    }

    #[test]
    fn test_decodes_triplets() {
        let payload = format!("{}{}", triplet(b'G'), triplet(b'o'));
        assert_eq!(decode_whitespace(&payload).as_deref(), Some("Go"));
    }

    #[test]
    fn test_skips_foreign_triplets() {
        let payload = format!("\u{2000}\u{200B}\u{2001}{}", triplet(b'k'));
        assert_eq!(decode_whitespace(&payload).as_deref(), Some("k"));
    }

    #[test]
    fn test_drops_trailing_partial_triplet() {
        let payload = format!("{}\u{2000}\u{2001}", triplet(b'k'));
        assert_eq!(decode_whitespace(&payload).as_deref(), Some("k"));
    }

    #[test]
    fn test_unprintable_codes_yield_nothing() {
        // Three plain spaces decode to 0.
        assert_eq!(decode_whitespace("   "), None);
        assert_eq!(decode_whitespace("\u{2000}\u{2001}"), None);
    }
}
