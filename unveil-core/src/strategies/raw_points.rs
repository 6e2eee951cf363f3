// unveil-core/src/strategies/raw_points.rs
//! Identity view of the payload: every scalar as `U+XXXX`.

use crate::occurrence::format_code_point;
use crate::strategy::{DecodingStrategy, StrategyId};

#[derive(Debug, Clone, Copy, Default)]
pub struct RawPointsStrategy;

impl DecodingStrategy for RawPointsStrategy {
    fn id(&self) -> StrategyId {
        StrategyId::RawPoints
    }

    fn method(&self) -> &'static str {
        "Raw Unicode Points"
    }

    fn confidence(&self) -> f64 {
        1.0
    }

    fn decode(&self, input: &str) -> Option<String> {
        raw_code_points(input)
    }
}

/// Space-joined `U+XXXX` labels, or `None` for an empty payload.
pub fn raw_code_points(hidden: &str) -> Option<String> {
    if hidden.is_empty() {
        return None;
    }
    let labels: Vec<String> = hidden.chars().map(|c| format_code_point(c as u32)).collect();
    Some(labels.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(
            raw_code_points("\u{200B}\u{E041}\u{F0000}").as_deref(),
            Some("U+200B U+E041 U+F0000")
        );
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(raw_code_points(""), None);
    }
}
