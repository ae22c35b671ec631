//! Display formatting for terminal output
//!
//! Provides the table renderer for report rows plus small formatting
//! helpers for listing screens.

pub mod report;

pub use report::render_table;
