// unveil-core/tests/detection_properties.rs
//! End-to-end properties of analysis, cleaning, extraction and decoding.

use unveil_core::{
    analyze, clean, decode_hidden, encode_direct_unicode, encode_hidden_message, encode_homoglyphs,
    encode_whitespace_variation, extract_hidden, homoglyph_capacity, is_suspicious,
    is_suspicious_code_point, splice_payload, StrategyId,
};
use unveil_core::strategies::{decode_binary, decode_direct_unicode, decode_homoglyphs, decode_whitespace};

const SAMPLES: &[&str] = &[
    "",
    "plain ascii, nothing to see",
    "Hello\u{200B}World",
    "\u{202E}gnp.exe\u{202C}",
    "p\u{0430}yp\u{0430}l.com",
    "tab\tand\nnewline\r\n",
    "emoji 😀 with VS16 ❤\u{FE0F}",
    "Привет, 世界! \u{E041}\u{F0001}\u{10FFFD}",
    "\u{2003}em space and\u{00A0}nbsp",
];

/// Re-interleaves the cleaned and extracted halves using the classifier.
fn remerge(text: &str) -> String {
    let cleaned = clean(text);
    let extracted = extract_hidden(text);
    let mut ordinary = cleaned.chars();
    let mut hidden = extracted.chars();
    text.chars()
        .filter_map(|c| if is_suspicious(c) { hidden.next() } else { ordinary.next() })
        .collect()
}

#[test]
fn test_printable_ascii_never_suspicious() {
    assert!((0x20..=0x7E).all(|cp| !is_suspicious_code_point(cp)));
}

#[test]
fn test_suspicious_ranges_always_flagged() {
    let ranges = [(0x200B, 0x200F), (0xE000, 0xF8FF), (0xD800, 0xDFFF), (0x2066, 0x2069)];
    for (low, high) in ranges {
        assert!((low..=high).all(is_suspicious_code_point), "range {:X}-{:X}", low, high);
    }
}

#[test]
fn test_clean_and_extract_partition_the_text() {
    for sample in SAMPLES {
        assert_eq!(remerge(sample), *sample);
        assert_eq!(
            clean(sample).chars().count() + extract_hidden(sample).chars().count(),
            sample.chars().count()
        );
    }
}

#[test]
fn test_clean_is_idempotent() {
    for sample in SAMPLES {
        let once = clean(sample);
        assert_eq!(clean(&once), once);
        assert!(extract_hidden(&once).is_empty());
    }
}

#[test]
fn test_empty_input() {
    let record = analyze("");
    assert_eq!(record.total_characters, 0);
    assert_eq!(record.visible_characters, 0);
    assert_eq!(record.invisible_characters, 0);
    assert!(record.suspicious_characters.is_empty());
    assert!(record.categories.is_empty());
    assert!(decode_hidden("").decodings.is_empty());
}

#[test]
fn test_hello_zero_width_world() {
    let text = "Hello\u{200B}World";
    let record = analyze(text);
    assert_eq!(record.total_characters, 11);
    assert_eq!(record.suspicious_count(), 1);
    assert_eq!(record.suspicious_characters[0].index, 5);
    assert_eq!(clean(text), "HelloWorld");
}

#[test]
fn test_runs_are_reported_per_scalar() {
    let text = format!("start{}end", "\u{200B}".repeat(6));
    let record = analyze(&text);
    assert_eq!(record.suspicious_count(), 6);
    assert_eq!(record.categories.get("ZERO"), Some(&6));
    let result = decode_hidden(&text);
    assert_eq!(result.extracted.chars().count(), 6);
    assert_eq!(
        result.candidate(StrategyId::RawPoints).unwrap().result,
        vec!["U+200B"; 6].join(" ")
    );
}

#[test]
fn test_binary_round_trip() {
    let tampered = splice_payload("Hello, world", &encode_hidden_message("HI"));
    assert_eq!(decode_binary(&extract_hidden(&tampered)).as_deref(), Some("HI"));
    let result = decode_hidden(&tampered);
    assert_eq!(result.candidate(StrategyId::Binary).unwrap().result, "HI");
}

#[test]
fn test_direct_unicode_round_trip() {
    assert_eq!(decode_direct_unicode(&encode_direct_unicode("AI")).as_deref(), Some("AI"));
    let tampered = format!("ok{}", encode_direct_unicode("AI"));
    let candidate = decode_hidden(&tampered);
    let pua = candidate.candidate(StrategyId::DirectUnicode).unwrap();
    assert_eq!(pua.result, "AI");
    assert_eq!(pua.confidence, 0.8);
}

#[test]
fn test_whitespace_round_trip() {
    assert_eq!(decode_whitespace(&encode_whitespace_variation("Go")).as_deref(), Some("Go"));
}

#[test]
fn test_homoglyph_round_trip() {
    let cover = "Please process the sales report before the next episode of reviews.";
    assert!(homoglyph_capacity(cover) >= 16);
    let tampered = encode_homoglyphs(cover, "Hi");
    assert_ne!(tampered, cover);
    assert_eq!(tampered.chars().count(), cover.chars().count());
    assert_eq!(decode_homoglyphs(&tampered).as_deref(), Some("Hi"));

    let result = decode_hidden(&tampered);
    assert_eq!(result.candidate(StrategyId::Homoglyph).unwrap().result, "Hi");
}

#[test]
fn test_determinism() {
    let text = format!("x{}y{}", encode_hidden_message("ab"), encode_direct_unicode("cd"));
    assert_eq!(decode_hidden(&text), decode_hidden(&text));
    assert_eq!(analyze(&text), analyze(&text));
}

#[test_log::test]
fn test_decoding_logs_without_panicking() {
    let result = decode_hidden(&format!("Hi{}", encode_hidden_message("secret")));
    assert_eq!(result.candidate(StrategyId::Binary).unwrap().result, "secret");
}
