//! Core data models for repasse-cli
//!
//! Everything here mirrors what the REST backend sends: immutable snapshots
//! of financial records plus their server-computed summaries. The models
//! carry no behavior beyond construction, formatting and (de)serialization.

pub mod bank_return;
pub mod client;
pub mod health;
pub mod money;
pub mod owner;
pub mod period;
pub mod transfer;

pub use bank_return::{
    BankReturn, BankReturnMetadata, BankReturnSummary, BankReturnsResponse, ClientRef,
    NewBankReturn,
};
pub use client::{ClientDetail, ClientDetailResponse, ClientName, ClientNamesResponse};
pub use health::HealthResponse;
pub use money::Money;
pub use owner::{Owner, OwnersResponse};
pub use period::Period;
pub use transfer::{
    MonthlyTransfer, TenantRef, TransferMetadata, TransferSummary, TransfersResponse,
};
