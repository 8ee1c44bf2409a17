//! HTTP client for the folio portfolio API.
//!
//! One method per API operation, all JSON over HTTP against a fixed base
//! URL. The [`PortfolioApi`] trait fronts the concrete client so the
//! application and tests can substitute the transport.

pub mod client;
pub mod models;

pub use client::{PortfolioApi, PortfolioApiClient, DEFAULT_API_URL};
pub use models::*;
