//! Snapshot module - immutable dated captures of the portfolio.

mod snapshot_model;

pub use snapshot_model::*;
