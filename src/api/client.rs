//! Blocking HTTP client for the agency backend
//!
//! Thin typed wrappers over the REST endpoints. Every call refetches; there
//! is no client-side cache, so mutations need no invalidation step. Errors
//! split into transport failures (`Network`) and non-2xx answers (`Api`),
//! with no retry beyond reqwest's defaults.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{RepasseError, RepasseResult};
use crate::models::{
    BankReturnsResponse, ClientDetailResponse, ClientNamesResponse, HealthResponse, NewBankReturn,
    OwnersResponse, Period, TransfersResponse,
};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Typed client for the property-management REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash needed)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("repasse-cli/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bank returns for a whole month, across all owners
    pub fn monthly_bank_returns(&self, period: &Period) -> RepasseResult<BankReturnsResponse> {
        self.get_json(&format!(
            "/api/bank-returns/month/{}/{}",
            period.month, period.year
        ))
    }

    /// Bank returns for one owner in a period
    pub fn owner_bank_returns(
        &self,
        owner_id: i64,
        period: &Period,
    ) -> RepasseResult<BankReturnsResponse> {
        self.get_json(&format!(
            "/api/bank-returns/owner/{}?month={}&year={}",
            owner_id, period.month, period.year
        ))
    }

    /// Monthly transfer calculations for one owner in a period
    pub fn owner_transfers(
        &self,
        owner_id: i64,
        period: &Period,
    ) -> RepasseResult<TransfersResponse> {
        self.get_json(&format!(
            "/api/monthly-transfers/owner/{}?month={}&year={}",
            owner_id, period.month, period.year
        ))
    }

    /// Create a reconciliation record for a client in a period
    pub fn create_bank_return(
        &self,
        client_id: i64,
        period: &Period,
        payload: &NewBankReturn,
    ) -> RepasseResult<()> {
        let url = format!(
            "{}/api/bank-returns/client/{}/{}/{}",
            self.base_url, client_id, period.month, period.year
        );
        let response = self.http.post(&url).json(payload).send()?;
        Self::check_status(response)?;
        Ok(())
    }

    /// All owners
    pub fn owners(&self) -> RepasseResult<OwnersResponse> {
        self.get_json("/api/owners/")
    }

    /// Clients belonging to one owner
    pub fn owner_clients(&self, owner_id: i64) -> RepasseResult<ClientNamesResponse> {
        self.get_json(&format!("/api/owners/{}/clients", owner_id))
    }

    /// Names of all clients
    pub fn client_names(&self) -> RepasseResult<ClientNamesResponse> {
        self.get_json("/api/clients/names")
    }

    /// Full detail for one client
    ///
    /// An unknown id answers 404, which surfaces as a `NotFound` error
    /// rather than a raw HTTP status.
    pub fn client_detail(&self, client_id: i64) -> RepasseResult<ClientDetailResponse> {
        self.get_json(&format!("/api/clients/{}", client_id))
            .map_err(|err| match err {
                RepasseError::Api { status: 404, .. } => {
                    RepasseError::client_not_found(client_id.to_string())
                }
                other => other,
            })
    }

    /// Backend health check
    pub fn health(&self) -> RepasseResult<HealthResponse> {
        self.get_json("/api/health/complete")
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> RepasseResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send()?;
        let response = Self::check_status(response)?;
        response
            .json::<T>()
            .map_err(|e| RepasseError::Json(e.to_string()))
    }

    fn check_status(
        response: reqwest::blocking::Response,
    ) -> RepasseResult<reqwest::blocking::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(RepasseError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
