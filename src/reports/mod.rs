//! Financial report projections
//!
//! The one reusable unit of the application: pure transforms from fetched
//! records plus a server summary into (a) a displayable table with a
//! trailing totals row and (b) an exportable sheet with the same rows.
//! Monetary values are never re-derived client-side; the summary is trusted
//! as sent, and an inconsistency between rows and summary is a backend
//! defect the formatter does not correct.

pub mod bank_returns;
pub mod rows;
pub mod transfers;

pub use rows::{append_totals_row, Cell, Column, ReportRow, SheetValue, Tone};
