//! Bank-return reconciliation records
//!
//! A bank return is a snapshot of one tenant payment received via bank
//! clearing for a billing period, with the expected (title) amount, the
//! amount actually charged and the variance between them. Records are
//! read-only once fetched; new ones are appended through the creation
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Money;

/// Counterparty reference embedded in a bank return
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: i64,
    pub name: String,
}

/// One reconciliation record, as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankReturn {
    pub id: i64,
    pub client: ClientRef,
    pub month: u32,
    pub year: i32,
    pub payer_name: String,
    pub due_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub title_amount: Money,
    pub charged_amount: Money,
    pub variation_amount: Money,
}

/// Server-computed aggregate over the returned record set
///
/// Totals are taken verbatim wherever they are displayed; the client never
/// recomputes them from the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankReturnSummary {
    pub total_title_amount: Money,
    pub total_charged_amount: Money,
    pub total_variation_amount: Money,
    pub total_returns: u64,
}

/// Metadata echoed back with each report response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankReturnMetadata {
    #[serde(default)]
    pub owner_id: Option<i64>,
    pub month: u32,
    pub year: i32,
    pub generated_at: String,
}

/// Full response envelope for the bank-return report endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankReturnsResponse {
    pub data: Vec<BankReturn>,
    pub summary: BankReturnSummary,
    pub metadata: BankReturnMetadata,
}

/// Payload for creating a new reconciliation record
#[derive(Debug, Clone, Serialize)]
pub struct NewBankReturn {
    pub payer_name: String,
    pub due_date: NaiveDate,
    pub payment_date: NaiveDate,
    pub title_amount: Money,
    pub charged_amount: Money,
    pub variation_amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_response() {
        let json = r#"{
            "data": [
                {
                    "id": 1,
                    "client": {"id": 7, "name": "Maria Silva"},
                    "month": 5,
                    "year": 2026,
                    "payer_name": "Maria S.",
                    "due_date": "2026-05-10",
                    "payment_date": "2026-05-09",
                    "title_amount": 1500.0,
                    "charged_amount": 1495.5,
                    "variation_amount": -4.5
                }
            ],
            "summary": {
                "total_title_amount": 1500.0,
                "total_charged_amount": 1495.5,
                "total_variation_amount": -4.5,
                "total_returns": 1
            },
            "metadata": {"month": 5, "year": 2026, "generated_at": "2026-06-01T10:00:00"}
        }"#;

        let response: BankReturnsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].client.name, "Maria Silva");
        assert_eq!(response.data[0].variation_amount.centavos(), -450);
        assert_eq!(response.summary.total_returns, 1);
        assert_eq!(response.metadata.owner_id, None);
    }

    #[test]
    fn test_serialize_payload() {
        let payload = NewBankReturn {
            payer_name: "Maria S.".into(),
            due_date: NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
            payment_date: NaiveDate::from_ymd_opt(2026, 5, 9).unwrap(),
            title_amount: Money::from_centavos(150000),
            charged_amount: Money::from_centavos(149550),
            variation_amount: Money::from_centavos(-450),
        };

        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["payer_name"], "Maria S.");
        assert_eq!(json["due_date"], "2026-05-10");
        assert_eq!(json["title_amount"], 1500.0);
        assert_eq!(json["variation_amount"], -4.5);
    }
}
