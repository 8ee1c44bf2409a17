//! Dashboard module - explicit view-selection state.

mod dashboard_model;

pub use dashboard_model::*;

#[cfg(test)]
mod dashboard_model_tests;
