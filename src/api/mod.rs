//! HTTP client for the REST backend

pub mod client;

pub use client::ApiClient;
