// unveil-core/src/lib.rs
//! # Unveil Core Library
//!
//! `unveil-core` inspects text for Unicode code points that are invisible,
//! non-printing, homoglyphic or otherwise out of place in ordinary
//! human-authored text, and tries to recover messages hidden in them using
//! several known steganographic schemes.
//!
//! The library is pure and stateless. Every function takes text in and hands a
//! value back; there is no I/O outside of configuration loading, no shared
//! mutable state and no clock.
//!
//! ## Modules
//!
//! * `classifier`: Decides, per code point, whether it is ordinary or suspicious.
//! * `scanner`: Builds an `AnalysisRecord`, a cleaned copy and the extracted payload.
//! * `occurrence`: The `SuspiciousOccurrence` record and payload-safe logging helpers.
//! * `strategy`: Defines the `DecodingStrategy` trait and `StrategyId`.
//! * `strategies`: The concrete decoders (raw points, binary, PUA, whitespace, ASCII, homoglyph).
//! * `decoder`: Runs the strategies in their fixed order and collects candidates.
//! * `encoders`: The inverse schemes, used for fixtures and detection testing.
//! * `config`: `DecoderConfig` loading, validation and merging.
//! * `errors`: The `UnveilError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use unveil_core::{analyze, clean, decode_hidden, encode_hidden_message, StrategyId};
//!
//! let tampered = format!("Hello{}World", encode_hidden_message("HI"));
//!
//! let record = analyze(&tampered);
//! assert_eq!(record.suspicious_characters.len(), 16);
//! assert_eq!(clean(&tampered), "HelloWorld");
//!
//! let result = decode_hidden(&tampered);
//! let binary = result.candidate(StrategyId::Binary).unwrap();
//! assert_eq!(binary.result, "HI");
//! ```
//!
//! ## Error Handling
//!
//! Analysis, cleaning, extraction and decoding never fail: "no plausible
//! payload" is an absent candidate, not an error. Configuration loading uses
//! `anyhow::Result` and reports `UnveilError` variants for invalid input.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classifier;
pub mod config;
pub mod decoder;
pub mod encoders;
pub mod errors;
pub mod occurrence;
pub mod scanner;
pub mod strategies;
pub mod strategy;

/// Re-exports the classifier entry points.
pub use classifier::{
    classify,
    classify_code_point,
    describe,
    is_suspicious,
    is_suspicious_code_point,
    Classification,
    SUSPICIOUS_CATEGORIES,
};

/// Re-exports the decoder configuration types.
pub use config::{merge_config, DecoderConfig, StrategySetting};

/// Re-exports the decoding entry points and result records.
pub use decoder::{
    decode_hidden,
    decode_hidden_with_config,
    decode_with_strategies,
    DecodingCandidate,
    DecodingResult,
};

/// Re-exports the encoder set.
pub use encoders::{
    encode_direct_unicode,
    encode_hidden_message,
    encode_homoglyphs,
    encode_whitespace_variation,
    homoglyph_capacity,
    message_bit_len,
    splice_payload,
    EncodingScheme,
};

/// Re-exports the custom error type.
pub use errors::UnveilError;

pub use occurrence::{format_code_point, SuspiciousOccurrence};

/// Re-exports the scanning entry points.
pub use scanner::{analyze, clean, extract_hidden, is_visible, AnalysisRecord};

pub use strategies::default_strategies;
pub use strategy::{DecodingStrategy, StrategyId, StrategyInput};
