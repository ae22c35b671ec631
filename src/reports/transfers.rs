//! Monthly-transfer report projection
//!
//! Maps transfer calculations into display rows and sheet rows. Nullable
//! amounts render the not-informed placeholder in the table and export as
//! zero in the workbook, matching the workbooks the agency already files.

use crate::models::{MonthlyTransfer, Period, TransferSummary};

use super::rows::{append_totals_row, Cell, Column, ReportRow, SheetValue, NOT_INFORMED, TOTAL_LABEL};

/// Sheet name used in exported workbooks
pub const SHEET_NAME: &str = "Repasse Mensal";

/// Export columns with their fixed widths
pub const COLUMNS: [Column; 12] = [
    Column::new("Nome do Locatário", 30.0),
    Column::new("Data de Vencimento", 20.0),
    Column::new("Valor do Aluguel", 15.0),
    Column::new("Valor Pago", 15.0),
    Column::new("Condomínio", 15.0),
    Column::new("Pago pela Imobiliária", 20.0),
    Column::new("Base de Cálculo", 15.0),
    Column::new("Porcentagem", 15.0),
    Column::new("Comissão", 15.0),
    Column::new("Taxa de Envio", 15.0),
    Column::new("Valor Depositado", 15.0),
    Column::new("Data de Pagamento", 20.0),
];

/// Shorter labels used for the terminal table
pub const DISPLAY_LABELS: [&str; 10] = [
    "Locatário",
    "Vencimento",
    "Aluguel",
    "Valor Pago",
    "Condomínio",
    "Base Cálculo",
    "%",
    "Comissão",
    "Taxa Envio",
    "Valor Depositado",
];

fn percentage_text(percentage: Option<f64>) -> String {
    match percentage {
        Some(p) => format!("{}%", p),
        None => "-".to_string(),
    }
}

fn condo_cell(transfer: &MonthlyTransfer) -> Cell {
    let mut cell = Cell::money_opt(transfer.condo_fee);
    if transfer.condo_paid_by_agency {
        cell.text.push_str(" (Imob.)");
    }
    cell
}

/// One display row per transfer, in server order
pub fn display_rows(transfers: &[MonthlyTransfer]) -> Vec<ReportRow> {
    transfers
        .iter()
        .map(|t| {
            ReportRow(vec![
                Cell::text(t.tenant.name.clone()),
                Cell::date(t.due_date),
                Cell::money(t.rent_amount),
                Cell::money_opt(t.amount_paid),
                condo_cell(t),
                Cell::money(t.calculation_base),
                Cell::text(percentage_text(t.percentage)),
                Cell::money(t.commission),
                Cell::money_opt(t.delivery_fee),
                Cell::money(t.deposit_amount),
            ])
        })
        .collect()
}

/// Totals row, verbatim from the summary
///
/// Every money column reads from the summary, including Valor Pago and
/// Base de Cálculo; nothing is re-summed client-side.
pub fn totals_row(summary: &TransferSummary) -> ReportRow {
    ReportRow(vec![
        Cell::text(TOTAL_LABEL),
        Cell::blank(),
        Cell::money(summary.total_rent),
        Cell::money(summary.total_amount_paid),
        Cell::money(summary.total_condo_fees),
        Cell::money(summary.total_calculation_base),
        Cell::text("-"),
        Cell::money(summary.total_commission),
        Cell::money(summary.total_delivery_fees),
        Cell::money(summary.total_deposit),
    ])
}

/// Display table: transfer rows plus the totals row
pub fn display_table(transfers: &[MonthlyTransfer], summary: &TransferSummary) -> Vec<ReportRow> {
    append_totals_row(display_rows(transfers), totals_row(summary))
}

/// Sheet rows with raw numeric money values
pub fn sheet_rows(transfers: &[MonthlyTransfer]) -> Vec<Vec<SheetValue>> {
    transfers
        .iter()
        .map(|t| {
            vec![
                SheetValue::Text(t.tenant.name.clone()),
                SheetValue::date(t.due_date),
                SheetValue::money(t.rent_amount),
                SheetValue::money_or_zero(t.amount_paid),
                SheetValue::money_or_zero(t.condo_fee),
                SheetValue::Text(if t.condo_paid_by_agency { "Sim" } else { "Não" }.to_string()),
                SheetValue::money(t.calculation_base),
                SheetValue::Text(match t.percentage {
                    Some(p) => format!("{}%", p),
                    None => NOT_INFORMED.to_string(),
                }),
                SheetValue::money(t.commission),
                SheetValue::money_or_zero(t.delivery_fee),
                SheetValue::money(t.deposit_amount),
                SheetValue::date(t.payment_date),
            ]
        })
        .collect()
}

/// Sheet totals row, verbatim from the summary
pub fn sheet_totals(summary: &TransferSummary) -> Vec<SheetValue> {
    vec![
        SheetValue::Text(TOTAL_LABEL.to_string()),
        SheetValue::Empty,
        SheetValue::money(summary.total_rent),
        SheetValue::money(summary.total_amount_paid),
        SheetValue::money(summary.total_condo_fees),
        SheetValue::Empty,
        SheetValue::money(summary.total_calculation_base),
        SheetValue::Empty,
        SheetValue::money(summary.total_commission),
        SheetValue::money(summary.total_delivery_fees),
        SheetValue::money(summary.total_deposit),
        SheetValue::Empty,
    ]
}

/// File name for a per-owner report: `<Owner>_Repasse_<Month>_<Year>.xlsx`
pub fn owner_file_name(owner_name: &str, period: &Period) -> String {
    format!(
        "{}_Repasse_{}_{}.xlsx",
        owner_name,
        period.month_name(),
        period.year
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TenantRef};
    use chrono::NaiveDate;

    fn transfer(name: &str) -> MonthlyTransfer {
        MonthlyTransfer {
            id: 1,
            tenant: TenantRef {
                id: 11,
                name: name.to_string(),
            },
            month: 5,
            year: 2026,
            due_date: NaiveDate::from_ymd_opt(2026, 5, 10),
            rent_amount: Money::from_reais(2000.0),
            amount_paid: Some(Money::from_reais(2000.0)),
            payment_date: NaiveDate::from_ymd_opt(2026, 5, 9),
            condo_fee: Some(Money::from_reais(350.0)),
            condo_paid_by_agency: true,
            calculation_base: Money::from_reais(2000.0),
            percentage: Some(10.0),
            commission: Money::from_reais(200.0),
            delivery_fee: Some(Money::from_reais(25.0)),
            deposit_amount: Money::from_reais(1775.0),
        }
    }

    fn bare_transfer(name: &str) -> MonthlyTransfer {
        MonthlyTransfer {
            due_date: None,
            amount_paid: None,
            payment_date: None,
            condo_fee: None,
            condo_paid_by_agency: false,
            percentage: None,
            delivery_fee: None,
            ..transfer(name)
        }
    }

    fn summary() -> TransferSummary {
        TransferSummary {
            total_rent: Money::from_reais(2000.0),
            total_commission: Money::from_reais(200.0),
            total_condo_fees: Money::from_reais(350.0),
            total_delivery_fees: Money::from_reais(25.0),
            total_deposit: Money::from_reais(1775.0),
            total_properties: 1,
            total_amount_paid: Money::from_reais(2000.0),
            total_calculation_base: Money::from_reais(2000.0),
        }
    }

    #[test]
    fn test_display_row_formatting() {
        let rows = display_rows(&[transfer("João Pereira")]);
        let cells = rows[0].cells();

        assert_eq!(cells[0].text, "João Pereira");
        assert_eq!(cells[1].text, "10/05/2026");
        assert_eq!(cells[2].text, "R$ 2000,00");
        assert_eq!(cells[4].text, "R$ 350,00 (Imob.)");
        assert_eq!(cells[6].text, "10%");
    }

    #[test]
    fn test_display_row_placeholders() {
        let rows = display_rows(&[bare_transfer("João Pereira")]);
        let cells = rows[0].cells();

        assert_eq!(cells[1].text, "Não informado");
        assert_eq!(cells[3].text, "Não informado");
        assert_eq!(cells[4].text, "Não informado");
        assert_eq!(cells[6].text, "-");
    }

    #[test]
    fn test_totals_from_summary() {
        let table = display_table(&[transfer("A"), transfer("B")], &summary());
        assert_eq!(table.len(), 3);

        let totals = table[2].cells();
        assert_eq!(totals[0].text, "TOTAL");
        // Valor Pago and Base de Cálculo come from the summary, not from
        // summing the two displayed rows
        assert_eq!(totals[3].text, "R$ 2000,00");
        assert_eq!(totals[5].text, "R$ 2000,00");
        assert_eq!(totals[9].text, "R$ 1775,00");
    }

    #[test]
    fn test_sheet_rows_raw_values() {
        let rows = sheet_rows(&[transfer("A"), bare_transfer("B")]);

        assert_eq!(rows[0][2], SheetValue::Number(2000.0));
        assert_eq!(rows[0][5], SheetValue::Text("Sim".to_string()));
        assert_eq!(rows[0][7], SheetValue::Text("10%".to_string()));

        // Nullable amounts export as zero, texts as the placeholder
        assert_eq!(rows[1][3], SheetValue::Number(0.0));
        assert_eq!(rows[1][5], SheetValue::Text("Não".to_string()));
        assert_eq!(rows[1][7], SheetValue::Text("Não informado".to_string()));
        assert_eq!(rows[1][1], SheetValue::Text("Não informado".to_string()));
    }

    #[test]
    fn test_owner_file_name() {
        let period = Period::new(2026, 2).unwrap();
        assert_eq!(
            owner_file_name("Carlos Souza", &period),
            "Carlos Souza_Repasse_Fevereiro_2026.xlsx"
        );
    }
}
