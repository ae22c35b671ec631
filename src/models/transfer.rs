//! Monthly rent-transfer calculations
//!
//! A monthly transfer is the computed remittance from the agency to a
//! property owner for one tenant and one billing period, after commission,
//! condo fees and delivery fees. Several money fields are nullable: the
//! backend omits them when the underlying value was never informed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Money;

/// Tenant reference embedded in a transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantRef {
    pub id: i64,
    pub name: String,
}

/// One transfer calculation, as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTransfer {
    pub id: i64,
    pub tenant: TenantRef,
    pub month: u32,
    pub year: i32,
    pub due_date: Option<NaiveDate>,
    pub rent_amount: Money,
    pub amount_paid: Option<Money>,
    pub payment_date: Option<NaiveDate>,
    pub condo_fee: Option<Money>,
    pub condo_paid_by_agency: bool,
    pub calculation_base: Money,
    pub percentage: Option<f64>,
    pub commission: Money,
    pub delivery_fee: Option<Money>,
    pub deposit_amount: Money,
}

/// Server-computed aggregate over the returned transfer set
///
/// `total_amount_paid` and `total_calculation_base` default to zero for
/// backends that do not yet publish them; the totals row always reads from
/// here rather than summing displayed rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferSummary {
    pub total_rent: Money,
    pub total_commission: Money,
    pub total_condo_fees: Money,
    pub total_delivery_fees: Money,
    pub total_deposit: Money,
    pub total_properties: u64,
    #[serde(default)]
    pub total_amount_paid: Money,
    #[serde(default)]
    pub total_calculation_base: Money,
}

/// Metadata echoed back with each transfer response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferMetadata {
    pub owner_id: i64,
    pub month: u32,
    pub year: i32,
    pub generated_at: String,
}

/// Full response envelope for the monthly-transfer endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransfersResponse {
    pub data: Vec<MonthlyTransfer>,
    pub summary: TransferSummary,
    pub metadata: TransferMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_nulls() {
        let json = r#"{
            "data": [
                {
                    "id": 3,
                    "tenant": {"id": 11, "name": "João Pereira"},
                    "month": 5,
                    "year": 2026,
                    "due_date": null,
                    "rent_amount": 2000.0,
                    "amount_paid": null,
                    "payment_date": null,
                    "condo_fee": null,
                    "condo_paid_by_agency": false,
                    "calculation_base": 2000.0,
                    "percentage": 10,
                    "commission": 200.0,
                    "delivery_fee": null,
                    "deposit_amount": 1800.0
                }
            ],
            "summary": {
                "total_rent": 2000.0,
                "total_commission": 200.0,
                "total_condo_fees": 0,
                "total_delivery_fees": 0,
                "total_deposit": 1800.0,
                "total_properties": 1
            },
            "metadata": {"owner_id": 4, "month": 5, "year": 2026, "generated_at": "2026-06-01T10:00:00"}
        }"#;

        let response: TransfersResponse = serde_json::from_str(json).unwrap();
        let transfer = &response.data[0];
        assert_eq!(transfer.tenant.name, "João Pereira");
        assert!(transfer.due_date.is_none());
        assert!(transfer.amount_paid.is_none());
        assert_eq!(transfer.percentage, Some(10.0));
        assert_eq!(transfer.deposit_amount.centavos(), 180000);

        // Summary fields absent on the wire default to zero
        assert!(response.summary.total_amount_paid.is_zero());
        assert!(response.summary.total_calculation_base.is_zero());
    }
}
