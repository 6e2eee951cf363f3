// unveil/src/ui/diff_viewer.rs
//! Line diff between the original input and its cleaned copy.
//!
//! The "before" side renders each suspicious scalar as a `<U+XXXX>` marker,
//! otherwise removed zero-width characters would make changed lines look
//! identical.

use std::io::{self, Write};

use diffy::{create_patch, Line as DiffLine};
use unveil_core::{format_code_point, is_suspicious};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Replaces every suspicious scalar in `text` with a `<U+XXXX>` marker.
pub fn mark_hidden(text: &str) -> String {
    let mut marked = String::with_capacity(text.len());
    for c in text.chars() {
        if is_suspicious(c) {
            marked.push('<');
            marked.push_str(&format_code_point(c as u32));
            marked.push('>');
        } else {
            marked.push(c);
        }
    }
    marked
}

/// Writes a unified-style diff of `original` against `cleaned`.
pub fn print_diff<W: Write>(
    original: &str,
    cleaned: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let marked = mark_hidden(original);
    let patch = create_patch(&marked, cleaned);

    writeln!(writer, "{}", paint("--- original (hidden characters marked)", ThemeEntry::DiffHeader, theme_map, enable_colors))?;
    writeln!(writer, "{}", paint("+++ cleaned", ThemeEntry::DiffHeader, theme_map, enable_colors))?;

    let mut changed = false;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    changed = true;
                    let body = format!("-{}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&body, ThemeEntry::DiffRemoved, theme_map, enable_colors))?;
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    let body = format!("+{}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&body, ThemeEntry::DiffAdded, theme_map, enable_colors))?;
                }
                DiffLine::Context(s) => {
                    writeln!(writer, " {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if !changed {
        writeln!(writer, "No hidden characters removed.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn test_mark_hidden() {
        assert_eq!(mark_hidden("Hello\u{200B}World"), "Hello<U+200B>World");
        assert_eq!(mark_hidden("plain"), "plain");
    }

    #[test]
    fn test_diff_shows_markers() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_diff("keep\nHello\u{200B}World\n", "keep\nHelloWorld\n", &mut out, &theme, false).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("-Hello<U+200B>World"));
        assert!(rendered.contains("+HelloWorld"));
        assert!(rendered.contains(" keep"));
    }

    #[test]
    fn test_diff_without_changes() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_diff("same\n", "same\n", &mut out, &theme, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No hidden characters removed."));
    }
}
