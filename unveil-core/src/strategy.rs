// unveil-core/src/strategy.rs
//! Defines the `DecodingStrategy` trait and the identifiers of the built-in
//! strategies.
//!
//! Each strategy reinterprets a sequence of suspicious scalars as a hidden
//! message. Strategies are stateless: the same input always yields the same
//! candidate, and "nothing plausible here" is `None`, never an error.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnveilError;

/// Which text a strategy reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyInput {
    /// Only the suspicious scalars, in order.
    Extracted,
    /// The original, unfiltered text.
    FullText,
}

/// Identifies a built-in strategy. The declaration order is the execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    RawPoints,
    Binary,
    DirectUnicode,
    Whitespace,
    Ascii,
    Homoglyph,
}

impl StrategyId {
    pub const ALL: [StrategyId; 6] = [
        StrategyId::RawPoints,
        StrategyId::Binary,
        StrategyId::DirectUnicode,
        StrategyId::Whitespace,
        StrategyId::Ascii,
        StrategyId::Homoglyph,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyId::RawPoints => "raw_points",
            StrategyId::Binary => "binary",
            StrategyId::DirectUnicode => "direct_unicode",
            StrategyId::Whitespace => "whitespace",
            StrategyId::Ascii => "ascii",
            StrategyId::Homoglyph => "homoglyph",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyId {
    type Err = UnveilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        StrategyId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| UnveilError::UnknownStrategy(s.to_string()))
    }
}

/// A pluggable decoder for one steganographic scheme.
pub trait DecodingStrategy: Send + Sync {
    fn id(&self) -> StrategyId;

    /// Human-readable method name shown next to each candidate.
    fn method(&self) -> &'static str;

    /// Static estimate of how likely a candidate from this strategy is an
    /// intentional hidden message. Not computed from content.
    fn confidence(&self) -> f64;

    fn input(&self) -> StrategyInput {
        StrategyInput::Extracted
    }

    /// Attempts a decode. `input` is the extracted payload or the full text,
    /// depending on [`DecodingStrategy::input`].
    fn decode(&self, input: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_id_round_trip_through_str() {
        for id in StrategyId::ALL {
            assert_eq!(id.as_str().parse::<StrategyId>().unwrap(), id);
        }
    }

    #[test]
    fn test_strategy_id_parse_is_lenient_on_case_and_dashes() {
        assert_eq!("Direct-Unicode".parse::<StrategyId>().unwrap(), StrategyId::DirectUnicode);
        assert!("rot13".parse::<StrategyId>().is_err());
    }

    #[test]
    fn test_declaration_order_matches_all() {
        let mut sorted = StrategyId::ALL;
        sorted.sort();
        assert_eq!(sorted, StrategyId::ALL);
    }
}
