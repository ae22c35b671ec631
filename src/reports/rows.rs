//! Row primitives shared by the report projections
//!
//! A report has two projections: display rows (pre-formatted strings with a
//! tone tag for sign coloring) and sheet rows (raw values so money columns
//! keep their numeric type in the workbook). Both are derived from the same
//! records and never persisted.

use chrono::NaiveDate;

use crate::models::Money;

/// Placeholder for values the backend did not inform
pub const NOT_INFORMED: &str = "Não informado";

/// Label of the synthetic totals row
pub const TOTAL_LABEL: &str = "TOTAL";

/// Sign-based style tag carried by variance cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    /// Non-negative variance (zero included)
    Positive,
    /// Strictly negative variance
    Negative,
}

/// One formatted cell of a display row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    /// Plain text cell
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Neutral,
        }
    }

    /// Empty cell (totals row filler)
    pub fn blank() -> Self {
        Self::text("")
    }

    /// Neutral money cell
    pub fn money(amount: Money) -> Self {
        Self::text(amount.to_string())
    }

    /// Nullable money cell; `None` renders the not-informed placeholder
    pub fn money_opt(amount: Option<Money>) -> Self {
        match amount {
            Some(m) => Self::money(m),
            None => Self::text(NOT_INFORMED),
        }
    }

    /// Money cell tagged by sign: `>= 0` positive, `< 0` negative
    pub fn signed_money(amount: Money) -> Self {
        Self {
            text: amount.to_string(),
            tone: if amount.is_negative() {
                Tone::Negative
            } else {
                Tone::Positive
            },
        }
    }

    /// Date cell in the Brazilian `DD/MM/YYYY` convention; `None` renders
    /// the not-informed placeholder
    pub fn date(date: Option<NaiveDate>) -> Self {
        Self::text(format_date(date))
    }
}

/// One row of the displayable table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow(pub Vec<Cell>);

impl ReportRow {
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }
}

/// Column of the exported sheet: human label plus fixed author-chosen width
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub width: f64,
}

impl Column {
    pub const fn new(label: &'static str, width: f64) -> Self {
        Self { label, width }
    }
}

/// Raw value for one sheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum SheetValue {
    Text(String),
    Number(f64),
    Empty,
}

impl SheetValue {
    /// Money keeps its numeric type in the workbook
    pub fn money(amount: Money) -> Self {
        Self::Number(amount.to_reais())
    }

    /// Nullable money exports as zero so money columns stay numeric
    pub fn money_or_zero(amount: Option<Money>) -> Self {
        Self::money(amount.unwrap_or_default())
    }

    /// Dates export as formatted text, not serial numbers
    pub fn date(date: Option<NaiveDate>) -> Self {
        Self::Text(format_date(date))
    }
}

/// Format a nullable date as `DD/MM/YYYY`, or the not-informed placeholder
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => NOT_INFORMED.to_string(),
    }
}

/// Append exactly one totals row, producing `rows.len() + 1` rows
///
/// The totals row is built by the caller from the server summary; this
/// helper only guarantees the arity.
pub fn append_totals_row(mut rows: Vec<ReportRow>, totals: ReportRow) -> Vec<ReportRow> {
    rows.push(totals);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_money_tone_threshold() {
        assert_eq!(Cell::signed_money(Money::from_centavos(1)).tone, Tone::Positive);
        assert_eq!(Cell::signed_money(Money::zero()).tone, Tone::Positive);
        assert_eq!(Cell::signed_money(Money::from_centavos(-1)).tone, Tone::Negative);
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 5, 9);
        assert_eq!(format_date(date), "09/05/2026");
        assert_eq!(format_date(None), "Não informado");
    }

    #[test]
    fn test_money_opt_placeholder() {
        assert_eq!(Cell::money_opt(None).text, "Não informado");
        assert_eq!(
            Cell::money_opt(Some(Money::from_centavos(150000))).text,
            "R$ 1500,00"
        );
    }

    #[test]
    fn test_append_totals_row_arity() {
        let rows = vec![
            ReportRow(vec![Cell::text("a")]),
            ReportRow(vec![Cell::text("b")]),
        ];
        let totals = ReportRow(vec![Cell::text(TOTAL_LABEL)]);

        let out = append_totals_row(rows, totals);
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].cells()[0].text, "TOTAL");
    }

    #[test]
    fn test_sheet_value_money_is_numeric() {
        assert_eq!(
            SheetValue::money(Money::from_centavos(123450)),
            SheetValue::Number(1234.5)
        );
        assert_eq!(SheetValue::money_or_zero(None), SheetValue::Number(0.0));
    }
}
