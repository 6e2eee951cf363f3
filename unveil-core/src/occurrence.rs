// unveil-core/src/occurrence.rs
//! The per-occurrence record produced by scanning, plus logging helpers that
//! keep recovered payloads out of debug logs unless explicitly allowed.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Initialized once: whether decoded payloads may appear verbatim in debug logs.
    /// Payloads can carry hostile instructions, so the default is to redact them.
    static ref PAYLOAD_DEBUG_ALLOWED: bool = {
        std::env::var("UNVEIL_LOG_PAYLOADS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One suspicious scalar found in a text.
///
/// `index` counts Unicode scalar values from the start of the text (not UTF-16
/// code units). `byte_offset` is the UTF-8 offset, usable for slicing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousOccurrence {
    pub character: char,
    pub code_point: u32,
    pub index: usize,
    pub byte_offset: usize,
    pub description: String,
}

impl SuspiciousOccurrence {
    /// `U+XXXX` label for this occurrence.
    pub fn label(&self) -> String {
        format_code_point(self.code_point)
    }

    /// The histogram bucket: the first space-delimited word of the description.
    pub fn category(&self) -> &str {
        category_of(&self.description)
    }
}

/// Formats a code point as `U+XXXX`, zero-padded to at least four hex digits.
pub fn format_code_point(cp: u32) -> String {
    format!("U+{:04X}", cp)
}

pub(crate) fn category_of(description: &str) -> &str {
    description.split(' ').next().unwrap_or(description)
}

pub fn redact_payload(s: &str) -> String {
    format!("[PAYLOAD: {} chars]", s.chars().count())
}

fn get_loggable_payload(payload: &str) -> String {
    if *PAYLOAD_DEBUG_ALLOWED {
        payload.to_string()
    } else {
        redact_payload(payload)
    }
}

pub fn log_candidate_debug(module_path: &str, method: &str, result: &str, confidence: f64) {
    debug!(
        "{} Candidate from '{}' (confidence {:.2}): '{}'",
        module_path,
        method,
        confidence,
        get_loggable_payload(result)
    );
}

pub fn log_extracted_debug(module_path: &str, extracted: &str) {
    debug!(
        "{} Extracted hidden payload: {}",
        module_path,
        get_loggable_payload(extracted)
    );
}
