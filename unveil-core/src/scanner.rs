// unveil-core/src/scanner.rs
//! Scalar-by-scalar scanning of a text.
//!
//! All three entry points walk the text by Unicode scalar value, so a code
//! point above the BMP is always one unit. Filtering is not grapheme-cluster
//! aware: removing a suspicious base character can leave its ordinary
//! combining marks behind, and vice versa.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::{describe, is_suspicious};
use crate::occurrence::{category_of, SuspiciousOccurrence};

/// Zero-width characters that `char::is_whitespace` does not cover.
const INVISIBLE_FORMAT: [char; 5] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// Aggregate result of scanning one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub total_characters: usize,
    pub visible_characters: usize,
    pub invisible_characters: usize,
    pub suspicious_characters: Vec<SuspiciousOccurrence>,
    /// Occurrence counts keyed by the first word of each description.
    pub categories: BTreeMap<String, usize>,
}

impl AnalysisRecord {
    pub fn suspicious_count(&self) -> usize {
        self.suspicious_characters.len()
    }

    pub fn is_clean(&self) -> bool {
        self.suspicious_characters.is_empty()
    }
}

/// Whether `c` renders as something a reader can see.
pub fn is_visible(c: char) -> bool {
    !c.is_whitespace() && !INVISIBLE_FORMAT.contains(&c)
}

/// Scans `text` and builds its `AnalysisRecord`.
pub fn analyze(text: &str) -> AnalysisRecord {
    let mut record = AnalysisRecord::default();

    for (index, (byte_offset, c)) in text.char_indices().enumerate() {
        record.total_characters += 1;
        if is_visible(c) {
            record.visible_characters += 1;
        } else {
            record.invisible_characters += 1;
        }

        if is_suspicious(c) {
            let description = describe(c).into_owned();
            *record
                .categories
                .entry(category_of(&description).to_string())
                .or_insert(0) += 1;
            record.suspicious_characters.push(SuspiciousOccurrence {
                character: c,
                code_point: c as u32,
                index,
                byte_offset,
                description,
            });
        }
    }

    debug!(
        "Analyzed {} characters: {} visible, {} invisible, {} suspicious.",
        record.total_characters,
        record.visible_characters,
        record.invisible_characters,
        record.suspicious_characters.len()
    );
    record
}

/// Returns `text` with every suspicious scalar removed.
pub fn clean(text: &str) -> String {
    text.chars().filter(|&c| !is_suspicious(c)).collect()
}

/// Returns only the suspicious scalars of `text`, in order.
pub fn extract_hidden(text: &str) -> String {
    text.chars().filter(|&c| is_suspicious(c)).collect()
}
