// unveil/src/ui/scan_summary.rs
//! Human-readable rendering of an `AnalysisRecord`.
//!
//! A run of more than five consecutive occurrences of the same code point is
//! collapsed into one line (`U+200B ×6`); shorter runs are listed one per
//! line. This is display only; the record itself keeps every occurrence.

use std::io::{self, Write};

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use unveil_core::{AnalysisRecord, SuspiciousOccurrence};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Runs longer than this are printed as a single line.
const COLLAPSE_AFTER: usize = 5;

/// A run of identical, adjacent suspicious scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceRun<'a> {
    pub occurrences: &'a [SuspiciousOccurrence],
}

impl<'a> OccurrenceRun<'a> {
    pub fn first(&self) -> &'a SuspiciousOccurrence {
        &self.occurrences[0]
    }

    pub fn count(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_collapsed(&self) -> bool {
        self.count() > COLLAPSE_AFTER
    }
}

/// Groups adjacent occurrences of the same code point.
pub fn group_runs(occurrences: &[SuspiciousOccurrence]) -> Vec<OccurrenceRun<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    for end in 1..=occurrences.len() {
        let continues = occurrences.get(end).is_some_and(|next| {
            let prev = &occurrences[end - 1];
            prev.code_point == next.code_point && prev.index + 1 == next.index
        });
        if !continues {
            runs.push(OccurrenceRun { occurrences: &occurrences[start..end] });
            start = end;
        }
    }
    runs
}

fn write_occurrence<W: Write>(
    writer: &mut W,
    label: &str,
    occurrence: &SuspiciousOccurrence,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(
        writer,
        "  {:<16} index {:<6} {}",
        paint(label, ThemeEntry::CodePoint, theme_map, enable_colors),
        occurrence.index,
        occurrence.description
    )
}

pub fn print_summary<W: Write>(
    record: &AnalysisRecord,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint("Analysis Summary", ThemeEntry::Header, theme_map, enable_colors))?;
    writeln!(writer, "  Total characters:      {}", record.total_characters)?;
    writeln!(writer, "  Visible characters:    {}", record.visible_characters)?;
    writeln!(writer, "  Invisible characters:  {}", record.invisible_characters)?;
    writeln!(writer, "  Suspicious characters: {}", record.suspicious_count())?;

    if record.is_clean() {
        writeln!(writer, "{}", paint("No suspicious characters found.", ThemeEntry::Success, theme_map, enable_colors))?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Category", "Count"]);
    for (category, count) in &record.categories {
        table.add_row(vec![
            paint(category, ThemeEntry::SummaryCategory, theme_map, enable_colors),
            paint(&count.to_string(), ThemeEntry::SummaryOccurrences, theme_map, enable_colors),
        ]);
    }
    writeln!(writer, "{}", table)?;

    writeln!(writer, "{}", paint("Occurrences", ThemeEntry::Header, theme_map, enable_colors))?;
    for run in group_runs(&record.suspicious_characters) {
        if run.is_collapsed() {
            let label = format!("{} ×{}", run.first().label(), run.count());
            write_occurrence(writer, &label, run.first(), theme_map, enable_colors)?;
        } else {
            for occurrence in run.occurrences {
                write_occurrence(writer, &occurrence.label(), occurrence, theme_map, enable_colors)?;
            }
        }
    }
    Ok(())
}
