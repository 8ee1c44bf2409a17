//! Allocation module - distribution models and the holdings aggregator.

mod allocation_model;
mod allocation_service;

pub use allocation_model::*;
pub use allocation_service::*;
