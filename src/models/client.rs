//! Client (tenant) records
//!
//! Clients are the tenants whose rent the agency manages. The listing
//! endpoints wrap their payloads in a `{ data, error }` envelope.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Money;

/// Minimal client reference, as returned by the names endpoint and the
/// per-owner client listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientName {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Full client record from the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDetail {
    pub id: i64,
    pub name: String,
    pub status: String,
    /// Day of the month rent falls due
    #[serde(default)]
    pub due_date: Option<u32>,
    #[serde(default)]
    pub amount_paid: Option<Money>,
    #[serde(default)]
    pub condo_fee: Option<Money>,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default)]
    pub delivery_fee: Option<Money>,
    pub start_date: Option<NaiveDate>,
    pub condo_paid: bool,
    pub is_active: bool,
    pub owner_id: i64,
}

/// Envelope for client name listings
#[derive(Debug, Clone, Deserialize)]
pub struct ClientNamesResponse {
    pub data: Vec<ClientName>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for the client detail endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ClientDetailResponse {
    pub data: ClientDetail,
    #[serde(default)]
    pub error: Option<String>,
}
