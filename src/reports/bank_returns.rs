//! Bank-return report projection
//!
//! Maps reconciliation records into display rows and sheet rows. Server
//! order is preserved; totals come verbatim from the server summary.

use crate::models::{BankReturn, BankReturnSummary, Period};

use super::rows::{append_totals_row, Cell, Column, ReportRow, SheetValue, TOTAL_LABEL};

/// Sheet name used in exported workbooks
pub const SHEET_NAME: &str = "Retornos Bancários";

/// Export columns with their fixed widths
pub const COLUMNS: [Column; 7] = [
    Column::new("Locatário", 30.0),
    Column::new("Pagador", 30.0),
    Column::new("Data de Vencimento", 20.0),
    Column::new("Data de Pagamento", 20.0),
    Column::new("Valor do Título", 15.0),
    Column::new("Valor Cobrado", 15.0),
    Column::new("Oscilação", 15.0),
];

/// Shorter labels used for the terminal table
pub const DISPLAY_LABELS: [&str; 7] = [
    "Locatário",
    "Pagador",
    "Vencimento",
    "Data Pagamento",
    "Valor Título",
    "Valor Cobrado",
    "Oscilação",
];

/// One display row per record, in server order
pub fn display_rows(records: &[BankReturn]) -> Vec<ReportRow> {
    records
        .iter()
        .map(|r| {
            ReportRow(vec![
                Cell::text(r.client.name.clone()),
                Cell::text(r.payer_name.clone()),
                Cell::date(r.due_date),
                Cell::date(r.payment_date),
                Cell::money(r.title_amount),
                Cell::money(r.charged_amount),
                Cell::signed_money(r.variation_amount),
            ])
        })
        .collect()
}

/// Totals row, verbatim from the summary
pub fn totals_row(summary: &BankReturnSummary) -> ReportRow {
    ReportRow(vec![
        Cell::text(TOTAL_LABEL),
        Cell::blank(),
        Cell::blank(),
        Cell::blank(),
        Cell::money(summary.total_title_amount),
        Cell::money(summary.total_charged_amount),
        Cell::signed_money(summary.total_variation_amount),
    ])
}

/// Display table: record rows plus the totals row
pub fn display_table(records: &[BankReturn], summary: &BankReturnSummary) -> Vec<ReportRow> {
    append_totals_row(display_rows(records), totals_row(summary))
}

/// Sheet rows with raw numeric money values
pub fn sheet_rows(records: &[BankReturn]) -> Vec<Vec<SheetValue>> {
    records
        .iter()
        .map(|r| {
            vec![
                SheetValue::Text(r.client.name.clone()),
                SheetValue::Text(r.payer_name.clone()),
                SheetValue::date(r.due_date),
                SheetValue::date(r.payment_date),
                SheetValue::money(r.title_amount),
                SheetValue::money(r.charged_amount),
                SheetValue::money(r.variation_amount),
            ]
        })
        .collect()
}

/// Sheet totals row, verbatim from the summary
pub fn sheet_totals(summary: &BankReturnSummary) -> Vec<SheetValue> {
    vec![
        SheetValue::Text(TOTAL_LABEL.to_string()),
        SheetValue::Empty,
        SheetValue::Empty,
        SheetValue::Empty,
        SheetValue::money(summary.total_title_amount),
        SheetValue::money(summary.total_charged_amount),
        SheetValue::money(summary.total_variation_amount),
    ]
}

/// File name for the monthly report: `Retornos_Bancarios_<Month>_<Year>.xlsx`
pub fn monthly_file_name(period: &Period) -> String {
    format!(
        "Retornos_Bancarios_{}_{}.xlsx",
        period.month_name(),
        period.year
    )
}

/// File name for a per-owner report: `<Owner>_Retornos_<Month>_<Year>.xlsx`
pub fn owner_file_name(owner_name: &str, period: &Period) -> String {
    format!(
        "{}_Retornos_{}_{}.xlsx",
        owner_name,
        period.month_name(),
        period.year
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientRef, Money};
    use crate::reports::rows::Tone;
    use chrono::NaiveDate;

    fn record(id: i64, client: &str, charged: f64, variation: f64) -> BankReturn {
        BankReturn {
            id,
            client: ClientRef {
                id,
                name: client.to_string(),
            },
            month: 5,
            year: 2026,
            payer_name: client.to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 5, 10),
            payment_date: NaiveDate::from_ymd_opt(2026, 5, 9),
            title_amount: Money::from_reais(charged),
            charged_amount: Money::from_reais(charged),
            variation_amount: Money::from_reais(variation),
        }
    }

    fn summary(charged: f64, variation: f64, count: u64) -> BankReturnSummary {
        BankReturnSummary {
            total_title_amount: Money::from_reais(charged),
            total_charged_amount: Money::from_reais(charged),
            total_variation_amount: Money::from_reais(variation),
            total_returns: count,
        }
    }

    #[test]
    fn test_one_row_per_record_in_order() {
        let records = vec![record(1, "B", 200.0, 10.0), record(2, "A", 100.0, -5.0)];
        let rows = display_rows(&records);

        assert_eq!(rows.len(), 2);
        // Server order preserved, no implicit sort
        assert_eq!(rows[0].cells()[0].text, "B");
        assert_eq!(rows[1].cells()[0].text, "A");
    }

    #[test]
    fn test_display_table_scenario() {
        // records A/B, summary 300 charged / +5 variation
        let records = vec![record(1, "A", 100.0, -5.0), record(2, "B", 200.0, 10.0)];
        let table = display_table(&records, &summary(300.0, 5.0, 2));

        assert_eq!(table.len(), 3);
        let totals = table[2].cells();
        assert_eq!(totals[0].text, "TOTAL");
        assert_eq!(totals[5].text, "R$ 300,00");
        assert_eq!(totals[6].text, "R$ 5,00");
        assert_eq!(totals[6].tone, Tone::Positive);
    }

    #[test]
    fn test_variance_tones() {
        let records = vec![record(1, "A", 100.0, -5.0), record(2, "B", 200.0, 0.0)];
        let rows = display_rows(&records);

        assert_eq!(rows[0].cells()[6].tone, Tone::Negative);
        // Zero tags positive, the threshold is >= 0
        assert_eq!(rows[1].cells()[6].tone, Tone::Positive);
    }

    #[test]
    fn test_totals_verbatim_from_summary() {
        // Summary deliberately inconsistent with the rows; the projection
        // must not correct it.
        let records = vec![record(1, "A", 100.0, 0.0)];
        let table = display_table(&records, &summary(999.0, -1.0, 1));

        let totals = table.last().unwrap().cells();
        assert_eq!(totals[5].text, "R$ 999,00");
        assert_eq!(totals[6].text, "R$ -1,00");
        assert_eq!(totals[6].tone, Tone::Negative);
    }

    #[test]
    fn test_sheet_rows_keep_numbers() {
        let records = vec![record(1, "A", 1234.5, -4.5)];
        let rows = sheet_rows(&records);

        assert_eq!(rows[0][4], SheetValue::Number(1234.5));
        assert_eq!(rows[0][6], SheetValue::Number(-4.5));
        assert_eq!(rows[0][2], SheetValue::Text("10/05/2026".to_string()));
    }

    #[test]
    fn test_file_names() {
        let period = Period::new(2026, 5).unwrap();
        assert_eq!(monthly_file_name(&period), "Retornos_Bancarios_Maio_2026.xlsx");
        assert_eq!(
            owner_file_name("Carlos Souza", &period),
            "Carlos Souza_Retornos_Maio_2026.xlsx"
        );
    }
}
