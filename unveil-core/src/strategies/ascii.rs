// unveil-core/src/strategies/ascii.rs
//! Best-effort reinterpretation of each scalar as ASCII.
//!
//! This is the most permissive strategy and usually produces noise. It still
//! emits whatever it finds, including an empty string, as long as the payload
//! was non-empty.

use crate::strategies::is_printable_ascii;
use crate::strategy::{DecodingStrategy, StrategyId};

#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiStrategy;

impl DecodingStrategy for AsciiStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::Ascii
    }

    fn method(&self) -> &'static str {
        "ASCII/UTF-8"
    }

    fn confidence(&self) -> f64 {
        0.6
    }

    fn decode(&self, input: &str) -> Option<String> {
        decode_as_ascii(input)
    }
}

pub fn decode_as_ascii(hidden: &str) -> Option<String> {
    if hidden.is_empty() {
        return None;
    }

    let result = hidden
        .chars()
        .filter_map(|c| {
            let cp = c as u32;
            if is_printable_ascii(cp) {
                Some(cp)
            } else if is_printable_ascii(cp % 128) {
                Some(cp % 128)
            } else {
                None
            }
        })
        .filter_map(char::from_u32)
        .collect();

    Some(result)
}
