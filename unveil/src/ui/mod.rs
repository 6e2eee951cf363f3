// unveil/src/ui/mod.rs
//! Terminal presentation: theme, message helpers and report renderers.

pub mod decode_report;
pub mod diff_viewer;
pub mod output_format;
pub mod scan_summary;
pub mod theme;
