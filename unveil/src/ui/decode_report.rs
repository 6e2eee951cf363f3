// unveil/src/ui/decode_report.rs
//! Human-readable rendering of a `DecodingResult`, with confidence badges.

use std::io::{self, Write};

use unveil_core::{DecodingCandidate, DecodingResult};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Candidates longer than this are truncated unless `--full` is given.
pub const PREVIEW_CHARS: usize = 200;

/// Coarse confidence band shown next to each candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBadge {
    High,
    Medium,
    Low,
}

impl ConfidenceBadge {
    pub fn for_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceBadge::High
        } else if confidence >= 0.5 {
            ConfidenceBadge::Medium
        } else {
            ConfidenceBadge::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceBadge::High => "High",
            ConfidenceBadge::Medium => "Medium",
            ConfidenceBadge::Low => "Low",
        }
    }

    fn theme_entry(&self) -> ThemeEntry {
        match self {
            ConfidenceBadge::High => ThemeEntry::ConfidenceHigh,
            ConfidenceBadge::Medium => ThemeEntry::ConfidenceMedium,
            ConfidenceBadge::Low => ThemeEntry::ConfidenceLow,
        }
    }
}

/// Escapes control characters and truncates to `limit` scalars.
pub fn preview(result: &str, limit: Option<usize>) -> String {
    let mut rendered = String::new();
    for (n, c) in result.chars().enumerate() {
        if limit.is_some_and(|limit| n >= limit) {
            rendered.push('…');
            break;
        }
        if c.is_control() {
            rendered.extend(c.escape_default());
        } else {
            rendered.push(c);
        }
    }
    rendered
}

fn print_candidate<W: Write>(
    candidate: &DecodingCandidate,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
    full: bool,
) -> io::Result<()> {
    let badge = ConfidenceBadge::for_confidence(candidate.confidence);
    let tag = format!("[{} {:.2}]", badge.label(), candidate.confidence);
    writeln!(
        writer,
        "{} {}",
        paint(&tag, badge.theme_entry(), theme_map, enable_colors),
        paint(&candidate.method, ThemeEntry::Header, theme_map, enable_colors)
    )?;
    let limit = if full { None } else { Some(PREVIEW_CHARS) };
    if candidate.result.is_empty() {
        writeln!(writer, "  (empty)")?;
    } else {
        writeln!(writer, "  {}", preview(&candidate.result, limit))?;
    }
    Ok(())
}

pub fn print_report<W: Write>(
    result: &DecodingResult,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
    full: bool,
) -> io::Result<()> {
    if result.extracted.is_empty() {
        writeln!(writer, "{}", paint("No hidden payload found.", ThemeEntry::Success, theme_map, enable_colors))?;
        return Ok(());
    }

    writeln!(
        writer,
        "{}",
        paint(
            &format!("Hidden payload: {} characters", result.extracted.chars().count()),
            ThemeEntry::Header,
            theme_map,
            enable_colors
        )
    )?;
    if result.decodings.is_empty() {
        writeln!(writer, "No candidate passed the active strategies and confidence floor.")?;
    }
    for candidate in &result.decodings {
        print_candidate(candidate, writer, theme_map, enable_colors, full)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use unveil_core::{decode_hidden, encode_hidden_message};

    #[test]
    fn test_badges() {
        assert_eq!(ConfidenceBadge::for_confidence(1.0), ConfidenceBadge::High);
        assert_eq!(ConfidenceBadge::for_confidence(0.8), ConfidenceBadge::High);
        assert_eq!(ConfidenceBadge::for_confidence(0.65), ConfidenceBadge::Medium);
        assert_eq!(ConfidenceBadge::for_confidence(0.5), ConfidenceBadge::Medium);
        assert_eq!(ConfidenceBadge::for_confidence(0.49), ConfidenceBadge::Low);
    }

    #[test]
    fn test_preview_truncates_and_escapes() {
        let long = "a".repeat(250);
        let shown = preview(&long, Some(PREVIEW_CHARS));
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
        assert!(shown.ends_with('…'));
        assert_eq!(preview(&long, None), long);
        assert_eq!(preview("a\u{0007}b", None), "a\\u{7}b");
    }

    #[test]
    fn test_report_lists_candidates() {
        let theme = ThemeStyle::default_theme_map();
        let result = decode_hidden(&format!("Hi{}", encode_hidden_message("HI")));
        let mut out = Vec::new();
        print_report(&result, &mut out, &theme, false, false).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Hidden payload: 16 characters"));
        assert!(rendered.contains("[High 1.00] Raw Unicode Points"));
        assert!(rendered.contains("[Medium 0.70] Binary (ZWSP/ZWNJ)"));
        assert!(rendered.contains("  HI\n"));
    }

    #[test]
    fn test_report_for_clean_text() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_report(&DecodingResult::default(), &mut out, &theme, false, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No hidden payload found."));
    }
}
