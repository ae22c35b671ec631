//! Excel workbook export
//!
//! Writes a rectangular sheet: one bold header row from the column labels,
//! one row per record, one totals row. Column widths are the fixed
//! per-column constants carried by the report definitions; nothing is
//! auto-sized. An empty record set produces no file at all.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::{RepasseError, RepasseResult};
use crate::reports::{Column, SheetValue};

/// Write a report workbook to `path`
///
/// Returns the number of sheet rows written, header and totals included.
/// Fails with an export error before touching the filesystem when `rows`
/// is empty, so the caller can surface "nothing to export" without a stray
/// empty file appearing.
pub fn write_report(
    path: &Path,
    sheet_name: &str,
    columns: &[Column],
    rows: &[Vec<SheetValue>],
    totals: &[SheetValue],
) -> RepasseResult<u32> {
    if rows.is_empty() {
        return Err(RepasseError::Export(
            "no records to export for the selected period".to_string(),
        ));
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header_format = Format::new().set_bold();
    for (col, column) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column.label, &header_format)?;
        worksheet.set_column_width(col as u16, column.width)?;
    }

    let mut next_row: u32 = 1;
    for row in rows {
        write_row(worksheet, next_row, row)?;
        next_row += 1;
    }
    write_row(worksheet, next_row, totals)?;

    workbook.save(path)?;
    Ok(next_row + 1)
}

fn write_row(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    values: &[SheetValue],
) -> RepasseResult<()> {
    for (col, value) in values.iter().enumerate() {
        match value {
            SheetValue::Text(text) => {
                worksheet.write_string(row, col as u16, text)?;
            }
            SheetValue::Number(number) => {
                worksheet.write_number(row, col as u16, *number)?;
            }
            SheetValue::Empty => {}
        }
    }
    Ok(())
}
