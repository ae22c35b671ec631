//! Spreadsheet export for repasse-cli
//!
//! The exported artifact mirrors the displayed table: same rows, same
//! totals, plus a header row. File names are deterministic per report kind
//! and period, so re-exporting a period overwrites the previous workbook.

pub mod xlsx;

pub use xlsx::write_report;
