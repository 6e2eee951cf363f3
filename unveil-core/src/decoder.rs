// unveil-core/src/decoder.rs
//! One-shot decoding: extract the payload, run every strategy in its fixed
//! order and collect the candidates.
//!
//! Candidates are never re-sorted. Presentation order is strategy order; each
//! candidate's `confidence` is the only ranking signal.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::DecoderConfig;
use crate::occurrence::{log_candidate_debug, log_extracted_debug};
use crate::scanner::extract_hidden;
use crate::strategies::default_strategies;
use crate::strategy::{DecodingStrategy, StrategyId, StrategyInput};

/// The built-in strategies, constructed once. They hold no state.
static STRATEGIES: Lazy<Vec<Box<dyn DecodingStrategy>>> = Lazy::new(default_strategies);

fn registry() -> impl Iterator<Item = &'static dyn DecodingStrategy> {
    STRATEGIES.iter().map(|s| &**s)
}

/// One interpretation of the hidden payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodingCandidate {
    pub strategy: StrategyId,
    pub method: String,
    pub result: String,
    pub confidence: f64,
}

/// The extracted payload and every candidate produced from it, in strategy order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodingResult {
    pub extracted: String,
    pub decodings: Vec<DecodingCandidate>,
}

impl DecodingResult {
    /// The candidate produced by `id`, if that strategy emitted one.
    pub fn candidate(&self, id: StrategyId) -> Option<&DecodingCandidate> {
        self.decodings.iter().find(|c| c.strategy == id)
    }

    pub fn is_empty(&self) -> bool {
        self.decodings.is_empty()
    }
}

/// Extracts the hidden payload of `text` and runs all built-in strategies.
///
/// Text without a single suspicious scalar yields an empty result without
/// running any strategy, so clean text never produces homoglyph noise.
pub fn decode_hidden(text: &str) -> DecodingResult {
    decode_with_strategies(text, registry())
}

/// Like [`decode_hidden`], restricted to the strategies `config` enables and
/// dropping candidates below its confidence floor. Order is preserved.
pub fn decode_hidden_with_config(text: &str, config: &DecoderConfig) -> DecodingResult {
    let floor = config.min_confidence();
    let mut result = decode_with_strategies(text, registry().filter(|s| config.is_enabled(s.id())));
    result.decodings.retain(|c| c.confidence >= floor);
    result
}

/// Runs an arbitrary, ordered set of strategies over `text`.
pub fn decode_with_strategies<'a, I>(text: &str, strategies: I) -> DecodingResult
where
    I: IntoIterator<Item = &'a dyn DecodingStrategy>,
{
    let extracted = extract_hidden(text);
    if extracted.is_empty() {
        debug!("No suspicious characters found; skipping decoder strategies.");
        return DecodingResult::default();
    }
    log_extracted_debug(module_path!(), &extracted);

    let mut decodings = Vec::new();
    for strategy in strategies {
        let input = match strategy.input() {
            StrategyInput::Extracted => extracted.as_str(),
            StrategyInput::FullText => text,
        };
        match strategy.decode(input) {
            Some(result) => {
                log_candidate_debug(module_path!(), strategy.method(), &result, strategy.confidence());
                decodings.push(DecodingCandidate {
                    strategy: strategy.id(),
                    method: strategy.method().to_string(),
                    result,
                    confidence: strategy.confidence(),
                });
            }
            None => debug!("Strategy '{}' produced no candidate.", strategy.id()),
        }
    }

    debug!("Decoding produced {} candidate(s).", decodings.len());
    DecodingResult { extracted, decodings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::{encode_direct_unicode, encode_hidden_message};

    #[test]
    fn test_clean_text_yields_empty_result() {
        assert_eq!(decode_hidden(""), DecodingResult::default());
        // Homoglyph opportunities alone do not trigger decoding.
        assert_eq!(decode_hidden("a perfectly ordinary sentence"), DecodingResult::default());
    }

    #[test]
    fn test_candidates_follow_strategy_order() {
        let text = format!("x{}y", encode_hidden_message("HI"));
        let result = decode_hidden(&text);
        let ids: Vec<StrategyId> = result.decodings.iter().map(|c| c.strategy).collect();
        // No PUA or whitespace payload, so those two strategies stay silent.
        assert_eq!(
            ids,
            vec![StrategyId::RawPoints, StrategyId::Binary, StrategyId::Ascii, StrategyId::Homoglyph]
        );
        assert_eq!(result.candidate(StrategyId::Binary).unwrap().result, "HI");
        assert_eq!(result.candidate(StrategyId::Binary).unwrap().method, "Binary (ZWSP/ZWNJ)");
    }

    #[test]
    fn test_raw_points_anchor_every_result() {
        let result = decode_hidden("\u{E041}");
        let raw = &result.decodings[0];
        assert_eq!(raw.strategy, StrategyId::RawPoints);
        assert_eq!(raw.result, "U+E041");
        assert_eq!(raw.confidence, 1.0);
        assert_eq!(result.extracted, "\u{E041}");
    }

    #[test]
    fn test_config_filters_and_floor() {
        let text = encode_direct_unicode("AI");
        let mut config = DecoderConfig::load_default().unwrap();
        config.set_active_strategies(&[], &["raw_points".to_string()]);
        config.min_confidence = Some(0.7);

        let result = decode_hidden_with_config(&text, &config);
        let ids: Vec<StrategyId> = result.decodings.iter().map(|c| c.strategy).collect();
        assert_eq!(ids, vec![StrategyId::DirectUnicode]);
        assert_eq!(result.decodings[0].result, "AI");
    }

    #[test]
    fn test_custom_strategy_set() {
        let strategies = default_strategies();
        let only_pua = strategies
            .iter()
            .map(|s| &**s)
            .filter(|s| s.id() == StrategyId::DirectUnicode);
        let result = decode_with_strategies(&encode_direct_unicode("ok"), only_pua);
        assert_eq!(result.decodings.len(), 1);
        assert_eq!(result.decodings[0].result, "ok");
    }
}
