//! repasse-cli - Terminal front end for a property-management agency backend
//!
//! This library provides the core functionality for the repasse-cli
//! administrative tool. It talks to the agency's REST backend and renders
//! monthly rent-transfer calculations and bank-return reconciliation records
//! as terminal tables and Excel workbooks.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, bank returns, transfers)
//! - `api`: Blocking HTTP client for the REST backend
//! - `reports`: Pure record-to-row projections with totals
//! - `display`: Terminal table rendering
//! - `export`: Spreadsheet (.xlsx) export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use repasse_cli::api::ApiClient;
//! use repasse_cli::models::Period;
//!
//! let client = ApiClient::new("http://localhost:8000");
//! let period = Period::current();
//! let response = client.monthly_bank_returns(&period)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;

pub use error::RepasseError;
