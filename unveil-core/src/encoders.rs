// unveil-core/src/encoders.rs
//! Encoders for the schemes the decoders understand.
//!
//! These exist to produce fixtures and to test detection; the analysis path
//! never calls them. Every encoder frames its message as 8-bit units: a
//! character below U+0100 is one unit holding its code point, anything above
//! falls back to its UTF-8 bytes. None of them can fail. Latin-1 text
//! survives the binary scheme unchanged; ASCII survives every scheme.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unveil_tables::homoglyph::{glyph_for, has_glyph};
use unveil_tables::whitespace::variant;

use crate::errors::UnveilError;
use crate::strategies::binary::{ONE_BIT, ZERO_BIT};
use crate::strategies::direct_unicode::PUA_BASE;

/// The 8-bit units a message is framed as.
fn units_of(message: &str) -> Vec<u8> {
    let mut units = Vec::with_capacity(message.len());
    for c in message.chars() {
        match u8::try_from(c) {
            Ok(unit) => units.push(unit),
            Err(_) => units.extend_from_slice(c.encode_utf8(&mut [0; 4]).as_bytes()),
        }
    }
    units
}

/// Number of bits every scheme spends on `message`.
pub fn message_bit_len(message: &str) -> usize {
    units_of(message).len() * 8
}

/// Bits of `units`, most significant first.
fn bits_of(units: Vec<u8>) -> impl Iterator<Item = bool> {
    units
        .into_iter()
        .flat_map(|unit| (0..8).rev().map(move |shift| (unit >> shift) & 1 == 1))
}

/// Zero-width binary: one ZWSP (0) or ZWNJ (1) per bit, no delimiters.
pub fn encode_hidden_message(message: &str) -> String {
    bits_of(units_of(message))
        .map(|bit| if bit { ONE_BIT } else { ZERO_BIT })
        .collect()
}

/// One Private Use Area scalar per unit: U+E000 + unit.
pub fn encode_direct_unicode(message: &str) -> String {
    units_of(message)
        .into_iter()
        .filter_map(|byte| char::from_u32(PUA_BASE + u32::from(byte)))
        .collect()
}

/// One whitespace triplet per unit, low bits first.
pub fn encode_whitespace_variation(message: &str) -> String {
    let mut encoded = String::with_capacity(message.len() * 9);
    for byte in units_of(message) {
        encoded.push(variant(byte % 8));
        encoded.push(variant((byte >> 3) % 8));
        encoded.push(variant((byte >> 6) % 8));
    }
    encoded
}

/// Hides `secret` in `cover` by swapping substitutable ASCII characters for
/// their lookalikes. Each substitutable position consumes one bit; once the
/// bits run out the rest of the cover is copied unchanged. A cover with too
/// few positions carries a truncated secret (see [`homoglyph_capacity`]).
pub fn encode_homoglyphs(cover: &str, secret: &str) -> String {
    let mut bits = bits_of(units_of(secret));
    let mut encoded = String::with_capacity(cover.len() + secret.len() * 8);
    let mut exhausted = false;

    for c in cover.chars() {
        if !exhausted && has_glyph(c) {
            match bits.next() {
                Some(true) => {
                    encoded.push(glyph_for(c).unwrap_or(c));
                    continue;
                }
                Some(false) => {}
                None => exhausted = true,
            }
        }
        encoded.push(c);
    }
    encoded
}

/// Number of bits `cover` can carry under the homoglyph scheme.
pub fn homoglyph_capacity(cover: &str) -> usize {
    cover.chars().filter(|&c| has_glyph(c)).count()
}

/// Inserts `payload` after the first character of `carrier`, so the result
/// still starts with something visible.
pub fn splice_payload(carrier: &str, payload: &str) -> String {
    match carrier.char_indices().nth(1) {
        Some((at, _)) => {
            let mut spliced = String::with_capacity(carrier.len() + payload.len());
            spliced.push_str(&carrier[..at]);
            spliced.push_str(payload);
            spliced.push_str(&carrier[at..]);
            spliced
        }
        None => format!("{}{}", carrier, payload),
    }
}

/// The encoder schemes, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingScheme {
    Binary,
    Pua,
    Whitespace,
    Homoglyph,
}

impl EncodingScheme {
    pub const ALL: [EncodingScheme; 4] = [
        EncodingScheme::Binary,
        EncodingScheme::Pua,
        EncodingScheme::Whitespace,
        EncodingScheme::Homoglyph,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingScheme::Binary => "binary",
            EncodingScheme::Pua => "pua",
            EncodingScheme::Whitespace => "whitespace",
            EncodingScheme::Homoglyph => "homoglyph",
        }
    }

    pub fn needs_cover(&self) -> bool {
        matches!(self, EncodingScheme::Homoglyph)
    }

    /// Encodes `message`. Only the homoglyph scheme reads `cover`, and it
    /// fails with [`UnveilError::MissingCover`] without one.
    pub fn encode(&self, message: &str, cover: Option<&str>) -> Result<String, UnveilError> {
        match self {
            EncodingScheme::Binary => Ok(encode_hidden_message(message)),
            EncodingScheme::Pua => Ok(encode_direct_unicode(message)),
            EncodingScheme::Whitespace => Ok(encode_whitespace_variation(message)),
            EncodingScheme::Homoglyph => cover
                .map(|cover| encode_homoglyphs(cover, message))
                .ok_or(UnveilError::MissingCover),
        }
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingScheme {
    type Err = UnveilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "zero-width" | "zero_width" => Ok(EncodingScheme::Binary),
            "pua" | "direct-unicode" | "direct_unicode" => Ok(EncodingScheme::Pua),
            "whitespace" => Ok(EncodingScheme::Whitespace),
            "homoglyph" | "homoglyphs" => Ok(EncodingScheme::Homoglyph),
            _ => Err(UnveilError::UnknownScheme(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{decode_binary, decode_direct_unicode, decode_homoglyphs, decode_whitespace};

    #[test]
    fn test_binary_layout() {
        let encoded = encode_hidden_message("H");
        let expected: String = "01001000"
            .chars()
            .map(|b| if b == '1' { '\u{200C}' } else { '\u{200B}' })
            .collect();
        assert_eq!(encoded, expected);
        assert_eq!(encode_hidden_message(""), "");
    }

    #[test]
    fn test_binary_round_trips_latin1() {
        let encoded = encode_hidden_message("café");
        assert_eq!(encoded.chars().count(), 32);
        assert_eq!(decode_binary(&encoded).as_deref(), Some("café"));
        assert_eq!(message_bit_len("café"), 32);
    }

    #[test]
    fn test_wide_characters_fall_back_to_utf8() {
        // U+20AC is E2 82 AC in UTF-8.
        assert_eq!(message_bit_len("€"), 24);
        assert_eq!(encode_direct_unicode("€"), "\u{E0E2}\u{E082}\u{E0AC}");
    }

    #[test]
    fn test_pua_layout() {
        assert_eq!(encode_direct_unicode("AI"), "\u{E041}\u{E049}");
        assert_eq!(encode_direct_unicode("é"), "\u{E0E9}");
        assert_eq!(decode_direct_unicode(&encode_direct_unicode("AI")).as_deref(), Some("AI"));
    }

    #[test]
    fn test_whitespace_layout() {
        // 'G' = 71 = 7 + 0*8 + 1*64
        assert_eq!(encode_whitespace_variation("G"), "\u{2005} \u{00A0}");
        assert_eq!(decode_whitespace(&encode_whitespace_variation("Go")).as_deref(), Some("Go"));
    }

    #[test]
    fn test_homoglyph_substitution() {
        let cover = "peace process";
        // 'H' = 01001000: only the second and fifth opportunities are swapped.
        let encoded = encode_homoglyphs(cover, "H");
        assert_eq!(encoded, "p\u{0435}ac\u{0435} process");
        assert_eq!(encoded.chars().count(), cover.chars().count());
        assert_eq!(decode_homoglyphs(&encoded).as_deref(), Some("H"));
    }

    #[test]
    fn test_homoglyph_short_cover_truncates() {
        // Three opportunities carry less than a byte.
        let encoded = encode_homoglyphs("aces", "H");
        assert_eq!(encoded, "a\u{0441}es");
        assert_eq!(decode_homoglyphs(&encoded).as_deref(), Some(""));
    }

    #[test]
    fn test_homoglyph_skips_plain_s() {
        let encoded = encode_homoglyphs("sea of peace", "H");
        assert_eq!(encoded, "se\u{0430} of p\u{0435}ace");
        assert_eq!(decode_homoglyphs(&encoded).as_deref(), Some("H"));

        let cover = "Please process the sales report before the next episode of reviews.";
        let encoded = encode_homoglyphs(cover, "Hi");
        assert!(!encoded.contains('\u{0455}'));
        assert_eq!(decode_homoglyphs(&encoded).as_deref(), Some("Hi"));
    }

    #[test]
    fn test_capacity() {
        assert_eq!(homoglyph_capacity("peace process"), 9);
        assert_eq!(homoglyph_capacity("bdfg"), 0);
    }

    #[test]
    fn test_splice_payload() {
        assert_eq!(splice_payload("Hello", "\u{200B}"), "H\u{200B}ello");
        assert_eq!(splice_payload("é!", "\u{200B}"), "é\u{200B}!");
        assert_eq!(splice_payload("", "\u{200B}"), "\u{200B}");
    }

    #[test]
    fn test_scheme_dispatch() {
        assert_eq!("PUA".parse::<EncodingScheme>().unwrap(), EncodingScheme::Pua);
        assert!(matches!("rot13".parse::<EncodingScheme>(), Err(UnveilError::UnknownScheme(_))));
        assert!(matches!(EncodingScheme::Homoglyph.encode("x", None), Err(UnveilError::MissingCover)));
        assert_eq!(EncodingScheme::Binary.encode("H", None).unwrap(), encode_hidden_message("H"));
        for scheme in EncodingScheme::ALL {
            assert_eq!(scheme.as_str().parse::<EncodingScheme>().unwrap(), scheme);
        }
    }
}
