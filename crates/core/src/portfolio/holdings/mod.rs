//! Holdings module - position records and form canonicalization.

mod holdings_draft;
mod holdings_model;

pub use holdings_draft::*;
pub use holdings_model::*;

#[cfg(test)]
mod holdings_draft_tests;

#[cfg(test)]
mod holdings_model_tests;
